//! Multiple-comparison correction

use crate::{StatsError, StatsResult};

/// Holm-Bonferroni step-down adjustment.
///
/// Raw p-values are ranked ascending; the value at rank i (1-based) is
/// multiplied by m - i + 1, forced non-decreasing along the ranking, and
/// clamped to 1.0. The adjusted values are returned in the original input
/// order, element-wise >= the raw values.
///
/// Non-finite p-values are a hard error.
pub fn holm_adjust(p_values: &[f64]) -> StatsResult<Vec<f64>> {
    for (index, &value) in p_values.iter().enumerate() {
        if !value.is_finite() {
            return Err(StatsError::NonFiniteValue {
                name: "p_values",
                index,
                value,
            });
        }
    }

    let m = p_values.len();
    let mut order: Vec<usize> = (0..m).collect();
    order.sort_by(|&i, &j| {
        p_values[i]
            .partial_cmp(&p_values[j])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut adjusted = vec![0.0; m];
    let mut running_max = 0.0_f64;
    for (rank, &i) in order.iter().enumerate() {
        let adj = (p_values[i] * (m - rank) as f64).min(1.0);
        running_max = running_max.max(adj);
        adjusted[i] = running_max;
    }

    Ok(adjusted)
}
