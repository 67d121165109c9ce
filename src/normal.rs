//! Normal random variables.
//!
//! [`StandardNormal`] is the stateless N(0, 1) evaluator every other
//! distribution composes with; [`NormalRv`] is the tagged N(μ, σ) variable.

use std::fmt;
use std::io;

use crate::error::{DistributionError, Result};
use crate::random_variable::{check_probability, RandomVariable, RandomVariableType};
use crate::special;

/// The standard normal distribution N(0, 1).
///
/// Zero-sized and immutable, so a single shared instance
/// ([`STANDARD_NORMAL`]) is safe to use from any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardNormal;

/// Process-wide standard normal evaluator.
pub static STANDARD_NORMAL: StandardNormal = StandardNormal;

impl StandardNormal {
    pub fn mean(&self) -> f64 {
        0.0
    }

    pub fn stdv(&self) -> f64 {
        1.0
    }

    /// φ(x) = (1/√(2π)) exp(−x²/2).
    pub fn pdf(&self, x: f64) -> f64 {
        special::standard_normal_pdf(x)
    }

    /// Φ(x), absolute error < 7.5 × 10⁻⁸.
    pub fn cdf(&self, x: f64) -> f64 {
        special::standard_normal_cdf(x)
    }

    /// Φ⁻¹(p), the left-inverse of [`cdf`](Self::cdf).
    ///
    /// `p = 0` and `p = 1` map to `−∞` and `+∞`.
    ///
    /// # Errors
    /// [`DistributionError::OutOfRangeProbability`] if `p ∉ [0, 1]`.
    pub fn try_inverse_cdf(&self, p: f64) -> Result<f64> {
        let p = check_probability(p)?;
        Ok(special::inverse_normal_cdf(p))
    }

    /// Φ⁻¹(p), or `0.0` with a logged warning if `p ∉ [0, 1]`.
    pub fn inverse_cdf(&self, p: f64) -> f64 {
        self.try_inverse_cdf(p).unwrap_or_else(|e| {
            log::warn!("standard normal inverse CDF: {e}");
            0.0
        })
    }
}

/// Normal random variable N(μ, σ) identified by a registry tag.
///
/// Native parameters are `[mean, stdv]`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalRv {
    tag: i32,
    mean: f64,
    stdv: f64,
    start_value: f64,
    error: Option<DistributionError>,
}

impl NormalRv {
    /// Creates N(`mean`, `stdv`).
    ///
    /// A negative or non-finite `stdv` is kept as given and recorded as
    /// [`DistributionError::InvalidParameters`].
    pub fn new(tag: i32, mean: f64, stdv: f64) -> Self {
        let error = if stdv.is_finite() && stdv >= 0.0 && mean.is_finite() {
            None
        } else {
            let e = DistributionError::InvalidParameters(format!(
                "normal requires finite mean and stdv >= 0, got mean={mean}, stdv={stdv}"
            ));
            log::error!("Normal RV #{tag}: {e}");
            Some(e)
        };
        Self {
            tag,
            mean,
            stdv,
            start_value: 0.0,
            error,
        }
    }

    /// Creates a normal variable from `[mean, stdv]`.
    ///
    /// Any other length leaves the variable degenerate (`mean = stdv = 0`)
    /// with [`DistributionError::InvalidParameterCount`] recorded.
    pub fn from_parameters(tag: i32, parameters: &[f64]) -> Self {
        match *parameters {
            [mean, stdv] => Self::new(tag, mean, stdv),
            _ => {
                let e = DistributionError::InvalidParameterCount {
                    expected: 2,
                    got: parameters.len(),
                };
                log::error!("Normal RV #{tag} requires mean and stdv: {e}");
                Self {
                    tag,
                    mean: 0.0,
                    stdv: 0.0,
                    start_value: 0.0,
                    error: Some(e),
                }
            }
        }
    }

    /// Sets the seed value handed to iterative consumers.
    pub fn with_start_value(mut self, start_value: f64) -> Self {
        self.start_value = start_value;
        self
    }

    fn standardize(&self, x: f64) -> f64 {
        (x - self.mean) / self.stdv
    }
}

impl RandomVariable for NormalRv {
    fn tag(&self) -> i32 {
        self.tag
    }

    fn rv_type(&self) -> RandomVariableType {
        RandomVariableType::Normal
    }

    fn mean(&self) -> f64 {
        self.mean
    }

    fn stdv(&self) -> f64 {
        self.stdv
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.mean, self.stdv]
    }

    fn start_value(&self) -> f64 {
        self.start_value
    }

    fn pdf(&self, x: f64) -> f64 {
        STANDARD_NORMAL.pdf(self.standardize(x)) / self.stdv
    }

    fn cdf(&self, x: f64) -> f64 {
        STANDARD_NORMAL.cdf(self.standardize(x))
    }

    fn try_inverse_cdf(&self, p: f64) -> Result<f64> {
        Ok(self.mean + self.stdv * STANDARD_NORMAL.try_inverse_cdf(p)?)
    }

    fn construction_error(&self) -> Option<&DistributionError> {
        self.error.as_ref()
    }

    fn print(&self, sink: &mut dyn io::Write) -> io::Result<()> {
        write!(sink, "{self}")
    }
}

impl fmt::Display for NormalRv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Normal RV #{}", self.tag)?;
        writeln!(f, "\tmean = {}", self.mean)?;
        writeln!(f, "\tstdv = {}", self.stdv)
    }
}
