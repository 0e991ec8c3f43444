//! Per-measure analysis battery
//!
//! Runs the full test set for each dependent measure (descriptives,
//! normality, variance homogeneity, Welch's t, Mann-Whitney U), picks the
//! primary test per measure, and Holm-corrects the primary p-values across
//! all measures of the run.

use serde::Serialize;
use tracing::debug;

use crate::correction::holm_adjust;
use crate::descriptive::{descriptive_stats, DescriptiveStats};
use crate::tests::distributional::shapiro_wilk;
use crate::tests::nonparametric::mann_whitney_u;
use crate::tests::parametric::{levene_test, welch_t_test};
use crate::tests::{LeveneResult, MannWhitneyResult, ShapiroResult, TTestResult};
use crate::StatsResult;

/// Cleaned samples for one dependent measure, split by condition.
#[derive(Debug, Clone)]
pub struct MeasureSamples {
    /// Measure key, referenced by hypotheses via `dv_keys`
    pub key: String,
    /// Observations from the formal condition
    pub formal: Vec<f64>,
    /// Observations from the informal condition
    pub informal: Vec<f64>,
}

/// Options for an analysis run
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Family-wise significance level (default: 0.05)
    pub alpha: f64,
    /// Apply Holm-Bonferroni correction across measures (default: true)
    pub correction: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            correction: true,
        }
    }
}

/// Which test supplied the primary p-value for a measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryTest {
    Welch,
    MannWhitney,
}

/// Complete test battery for one measure.
#[derive(Debug, Clone, Serialize)]
pub struct MeasureAnalysis {
    /// Measure key
    pub key: String,
    /// Descriptives for the formal condition
    pub formal: DescriptiveStats,
    /// Descriptives for the informal condition
    pub informal: DescriptiveStats,
    /// Shapiro-Wilk on the formal sample
    pub normality_formal: ShapiroResult,
    /// Shapiro-Wilk on the informal sample
    pub normality_informal: ShapiroResult,
    /// Levene (Brown-Forsythe) variance homogeneity check
    pub variance_test: LeveneResult,
    /// Welch's t-test, formal vs informal
    pub t_test: TTestResult,
    /// Mann-Whitney U, formal vs informal
    pub mann_whitney: MannWhitneyResult,
    /// Welch unless either group fails the normality check
    pub primary_test: PrimaryTest,
    /// Primary p-value before correction
    pub p_raw: f64,
    /// Holm-adjusted p-value (equals `p_raw` when correction is off)
    pub p_adjusted: f64,
    /// `p_adjusted < alpha`
    pub significant: bool,
}

/// Run the full battery on every measure and Holm-correct across them.
///
/// The correction treats the set of primary p-values as one family, so a
/// single call should cover one analysis run, not be invoked per measure.
pub fn analyze_measures(
    measures: &[MeasureSamples],
    options: &AnalysisOptions,
) -> StatsResult<Vec<MeasureAnalysis>> {
    let mut analyses = Vec::with_capacity(measures.len());
    let mut raw_p = Vec::with_capacity(measures.len());

    for measure in measures {
        let formal = descriptive_stats(&measure.formal);
        let informal = descriptive_stats(&measure.informal);
        let normality_formal = shapiro_wilk(&measure.formal)?;
        let normality_informal = shapiro_wilk(&measure.informal)?;
        let variance_test = levene_test(&measure.formal, &measure.informal)?;
        let t_test = welch_t_test(&measure.formal, &measure.informal)?;
        let mann_whitney = mann_whitney_u(&measure.formal, &measure.informal)?;

        let primary_test = if normality_formal.is_normal && normality_informal.is_normal {
            PrimaryTest::Welch
        } else {
            PrimaryTest::MannWhitney
        };
        let p_raw = match primary_test {
            PrimaryTest::Welch => t_test.p_value,
            PrimaryTest::MannWhitney => mann_whitney.p_value,
        };

        debug!(measure = %measure.key, ?primary_test, p_raw, "measure tested");

        raw_p.push(p_raw);
        analyses.push(MeasureAnalysis {
            key: measure.key.clone(),
            formal,
            informal,
            normality_formal,
            normality_informal,
            variance_test,
            t_test,
            mann_whitney,
            primary_test,
            p_raw,
            p_adjusted: p_raw,
            significant: false,
        });
    }

    let adjusted = if options.correction {
        holm_adjust(&raw_p)?
    } else {
        raw_p
    };

    for (analysis, p_adjusted) in analyses.iter_mut().zip(adjusted) {
        analysis.p_adjusted = p_adjusted;
        analysis.significant = p_adjusted < options.alpha;
    }

    Ok(analyses)
}
