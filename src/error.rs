use thiserror::Error;

/// Errors produced by the interval engine.
///
/// Every procedure fails fast on a precondition violation and returns exactly
/// one of these kinds; there are no partial results and no NaN-bearing records.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StatsError {
    /// A configuration scalar is outside its valid range: `alpha` or `coverage`
    /// outside (0, 1), or `margin` not strictly positive.
    #[error("invalid configuration: {parameter} = {value} is out of range")]
    InvalidConfig {
        parameter: &'static str,
        value: f64,
    },

    /// The sample is too small for the requested procedure. All interval and
    /// test procedures require at least two observations.
    #[error("insufficient data: need at least 2 observations, got {n}")]
    InsufficientData { n: usize },
}
