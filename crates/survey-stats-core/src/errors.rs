use thiserror::Error;

/// Errors that can occur during statistical computations
///
/// Only malformed input is an error. Under-powered input (too few
/// observations, too few groups) produces a degenerate result from the test
/// functions instead, so interactive callers can render "not applicable"
/// without exception handling.
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Non-finite value in {name} at index {index}: {value}")]
    NonFiniteValue {
        name: &'static str,
        index: usize,
        value: f64,
    },

    #[error("Dimension mismatch: x has {x_len} elements, y has {y_len}")]
    DimensionMismatch { x_len: usize, y_len: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
