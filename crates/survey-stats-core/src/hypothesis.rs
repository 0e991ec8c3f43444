//! Declarative hypotheses and verdict aggregation
//!
//! Hypotheses are plain data, defined once per study (typically in a JSON
//! file shipped alongside it) and mapped onto per-measure test results to
//! produce a supported / partial / opposite / not-supported verdict. The
//! reduction is pure: the same analyses and definitions always yield the
//! same verdicts.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::MeasureAnalysis;
use crate::{StatsError, StatsResult};

/// Predicted direction of a group difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The formal condition is predicted to score higher.
    FormalHigher,
    /// The informal condition is predicted to score higher.
    InformalHigher,
    /// No direction predicted; any significant difference counts.
    Exploratory,
}

/// A pre-registered hypothesis over one or more dependent measures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hypothesis {
    /// Stable identifier (e.g. "h1")
    pub id: String,
    /// Short display label
    pub label: String,
    /// Full prediction text
    pub description: String,
    /// Predicted direction of the effect
    pub direction: Direction,
    /// Keys of the dependent measures this hypothesis is tested on
    pub dv_keys: Vec<String>,
}

/// Verdict for a hypothesis after multiple-comparison correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Support {
    /// Every associated measure is significant in the predicted direction.
    Supported,
    /// Some but not all measures are significant in the predicted direction.
    Partial,
    /// Significant effects exist only in the wrong direction.
    Opposite,
    /// No associated measure reaches significance.
    NotSupported,
}

/// Aggregated outcome for one hypothesis.
#[derive(Debug, Clone, Serialize)]
pub struct HypothesisResult {
    /// The hypothesis this verdict belongs to
    pub hypothesis: Hypothesis,
    /// Test results for the measures named by `dv_keys`, in that order
    pub per_measure: Vec<MeasureAnalysis>,
    /// Aggregated verdict
    pub support: Support,
    /// Human-readable one-line summary
    pub summary: String,
}

/// Load hypothesis definitions from a JSON array.
pub fn load_hypotheses(json: &str) -> StatsResult<Vec<Hypothesis>> {
    serde_json::from_str(json).map_err(|e| StatsError::SerializationError(e.to_string()))
}

/// Classify one hypothesis against the analyzed measures.
///
/// Direction is read off the Welch mean difference: positive favors the
/// formal condition. Exploratory hypotheses accept either direction and can
/// never be classified as opposite. A hypothesis whose `dv_keys` match no
/// analyzed measure is not supported.
pub fn evaluate_hypothesis(
    hypothesis: &Hypothesis,
    analyses: &[MeasureAnalysis],
) -> HypothesisResult {
    let per_measure: Vec<MeasureAnalysis> = hypothesis
        .dv_keys
        .iter()
        .filter_map(|key| analyses.iter().find(|m| &m.key == key).cloned())
        .collect();

    let total = per_measure.len();
    let mut significant_correct = 0usize;
    let mut significant_wrong = 0usize;
    for measure in &per_measure {
        if !measure.significant {
            continue;
        }
        let correct = match hypothesis.direction {
            Direction::FormalHigher => measure.t_test.mean_diff > 0.0,
            Direction::InformalHigher => measure.t_test.mean_diff < 0.0,
            Direction::Exploratory => true,
        };
        if correct {
            significant_correct += 1;
        } else {
            significant_wrong += 1;
        }
    }

    let support = if total > 0 && significant_correct == total {
        Support::Supported
    } else if significant_correct > 0 {
        Support::Partial
    } else if significant_wrong > 0 {
        Support::Opposite
    } else {
        Support::NotSupported
    };

    let summary = match support {
        Support::Supported => format!(
            "all {} measure(s) significant in the predicted direction",
            total
        ),
        Support::Partial => format!(
            "{} of {} measures significant in the predicted direction",
            significant_correct, total
        ),
        Support::Opposite => format!(
            "{} measure(s) significant against the predicted direction",
            significant_wrong
        ),
        Support::NotSupported => format!("no significant effect on {} measure(s)", total),
    };

    debug!(
        hypothesis = %hypothesis.id,
        ?support,
        significant_correct,
        significant_wrong,
        "hypothesis evaluated"
    );

    HypothesisResult {
        hypothesis: hypothesis.clone(),
        per_measure,
        support,
        summary,
    }
}

/// Evaluate a whole set of hypotheses against one analysis run.
pub fn evaluate_hypotheses(
    hypotheses: &[Hypothesis],
    analyses: &[MeasureAnalysis],
) -> Vec<HypothesisResult> {
    hypotheses
        .iter()
        .map(|h| evaluate_hypothesis(h, analyses))
        .collect()
}
