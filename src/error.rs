//! Error types for random-variable construction and evaluation.

use thiserror::Error;

/// Failure raised while building or evaluating a random variable.
///
/// Construction never aborts: a variable built from bad input keeps the
/// error and exposes it through
/// [`RandomVariable::construction_error`](crate::RandomVariable::construction_error).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// Parameter vector has the wrong length.
    #[error("expected {expected} parameters, got {got}")]
    InvalidParameterCount {
        /// Number of native parameters the distribution takes.
        expected: usize,
        /// Length of the sequence actually supplied.
        got: usize,
    },

    /// Moment-based parameterization received an unusable mean/stdv pair.
    #[error("cannot match moments mean={mean}, stdv={stdv}")]
    InvalidMoments {
        /// Mean handed to the moment-matching step.
        mean: f64,
        /// Standard deviation handed to the moment-matching step.
        stdv: f64,
    },

    /// Probability argument outside `[0, 1]`.
    #[error("probability {0} is outside [0, 1]")]
    OutOfRangeProbability(f64),

    /// Parameters violate distribution constraints.
    #[error("invalid distribution parameters: {0}")]
    InvalidParameters(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DistributionError>;
