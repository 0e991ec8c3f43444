//! survey-stats-core: statistics engine for survey experiments
//!
//! This crate provides the computation core behind a researcher-facing
//! analysis view: classical hypothesis tests (Welch's t, Mann-Whitney U,
//! Levene/Brown-Forsythe, Shapiro-Wilk, one-way ANOVA, chi-square
//! independence, Spearman correlation), Holm-Bonferroni multiple-comparison
//! correction, and the aggregation layer that turns per-measure results into
//! hypothesis verdicts.
//!
//! All computation is pure and synchronous: already-cleaned samples in,
//! structured results out. Data extraction, filtering of missing values, and
//! presentation live in the calling application.

pub mod analysis;
pub mod correction;
pub mod descriptive;
pub mod errors;
pub mod hypothesis;

pub use analysis::{
    analyze_measures, AnalysisOptions, MeasureAnalysis, MeasureSamples, PrimaryTest,
};
pub use correction::holm_adjust;
pub use descriptive::{descriptive_stats, DescriptiveStats};
pub use errors::{StatsError, StatsResult};
pub use hypothesis::{
    evaluate_hypotheses, evaluate_hypothesis, load_hypotheses, Direction, Hypothesis,
    HypothesisResult, Support,
};
pub use tests::categorical::chi_square_independence;
pub use tests::correlation::spearman;
pub use tests::distributional::shapiro_wilk;
pub use tests::nonparametric::mann_whitney_u;
pub use tests::parametric::{levene_test, one_way_anova, welch_t_test};
pub use tests::{
    AnovaResult, ChiSquareResult, CorrelationResult, LeveneResult, MannWhitneyResult,
    ShapiroResult, TTestResult,
};
