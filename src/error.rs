use thiserror::Error;

/// Result alias for spline construction and evaluation
pub type SplineResult<T> = Result<T, SplineError>;

/// Errors raised while building or evaluating a spline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// Two consecutive waypoints coincide, so the parameter sequence is not strictly increasing.
    /// `index` is the first of the two offending samples.
    #[error("degenerate parameter: samples {index} and {} share the same parameter", .index + 1)]
    DegenerateParameter { index: usize },

    #[error("parameter {parameter} is outside the domain [{min}, {max}]")]
    OutOfDomain { parameter: f64, min: f64, max: f64 },

    #[error("failed to solve the collocation system")]
    SingularSystem,

    #[error("unknown interpolation kind `{0}`, expected linear, quadratic or cubic")]
    UnknownKind(String),
}

/// Reasons an input is rejected before any fitting happens
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("sequence lengths differ: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("at least {required} points are required, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("non-finite value at index {index}")]
    NonFinite { index: usize },

    #[error("sampling step must be positive and finite, got {0}")]
    InvalidStep(f64),

    #[error("sampling would produce {requested} samples, more than the limit of {limit}")]
    TooManySamples { requested: f64, limit: usize },
}

impl SplineError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SplineError::InvalidInput(_))
    }
}
