//! Descriptive statistics for a single sample

use serde::Serialize;

/// Summary statistics for one sample
#[derive(Debug, Clone, Serialize)]
pub struct DescriptiveStats {
    /// Number of observations
    pub n: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (n-1 denominator)
    pub std: f64,
    /// Median (midpoint of the two central order statistics for even n)
    pub median: f64,
    /// Smallest observation
    pub min: f64,
    /// Largest observation
    pub max: f64,
}

impl DescriptiveStats {
    /// Zero-filled summary for an empty sample. Downstream callers rely on
    /// this convention instead of branching on emptiness.
    pub fn empty() -> Self {
        Self {
            n: 0,
            mean: 0.0,
            std: 0.0,
            median: 0.0,
            min: 0.0,
            max: 0.0,
        }
    }
}

/// Compute summary statistics for a sample.
///
/// Never fails: an empty sample yields the zero-filled summary, and a single
/// observation has std 0.
pub fn descriptive_stats(sample: &[f64]) -> DescriptiveStats {
    let n = sample.len();
    if n == 0 {
        return DescriptiveStats::empty();
    }

    let mean = sample.iter().sum::<f64>() / n as f64;

    let std = if n > 1 {
        let ss: f64 = sample.iter().map(|x| (x - mean) * (x - mean)).sum();
        (ss / (n - 1) as f64).sqrt()
    } else {
        0.0
    };

    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };

    DescriptiveStats {
        n,
        mean,
        std,
        median,
        min: sorted[0],
        max: sorted[n - 1],
    }
}
