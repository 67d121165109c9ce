//! The uniform random-variable contract.
//!
//! Reliability algorithms (FORM, SORM, sampling) only see this surface:
//! moments, native parameters, density, distribution function and its
//! inverse. Two dispatch styles are available: `&dyn RandomVariable` for
//! open sets and the closed [`Distribution`] sum type for the variants
//! shipped here.

use std::fmt;
use std::io;
use std::str::FromStr;

use crate::error::{DistributionError, Result};
use crate::lognormal::LognormalRv;
use crate::normal::NormalRv;

/// Discriminator consumed by algorithm dispatch code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RandomVariableType {
    Normal,
    Lognormal,
}

impl RandomVariableType {
    /// Fixed, case-sensitive type string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RandomVariableType::Normal => "NORMAL",
            RandomVariableType::Lognormal => "LOGNORMAL",
        }
    }
}

impl fmt::Display for RandomVariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RandomVariableType {
    type Err = DistributionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "NORMAL" => Ok(RandomVariableType::Normal),
            "LOGNORMAL" => Ok(RandomVariableType::Lognormal),
            other => Err(DistributionError::InvalidParameters(format!(
                "unknown random variable type {other:?}"
            ))),
        }
    }
}

/// A tagged, parametric continuous random variable.
///
/// Every method is a pure function of the variable's immutable fields.
/// Evaluation never panics; failures surface either as a typed error
/// ([`try_inverse_cdf`](Self::try_inverse_cdf)) or as a sentinel plus a
/// `log` diagnostic ([`inverse_cdf`](Self::inverse_cdf)).
pub trait RandomVariable: fmt::Debug + Send + Sync {
    /// Registry-assigned identifier, fixed at construction.
    fn tag(&self) -> i32;

    fn rv_type(&self) -> RandomVariableType;

    /// Shorthand for `self.rv_type().as_str()`.
    fn type_name(&self) -> &'static str {
        self.rv_type().as_str()
    }

    fn mean(&self) -> f64;

    fn stdv(&self) -> f64;

    /// Native parameters in their canonical order.
    fn parameters(&self) -> Vec<f64>;

    /// Seed value for iterative consumers; not used by the density math.
    fn start_value(&self) -> f64;

    fn pdf(&self, x: f64) -> f64;

    fn cdf(&self, x: f64) -> f64;

    /// Inverse CDF with an explicit error for `p ∉ [0, 1]`.
    ///
    /// # Errors
    /// [`DistributionError::OutOfRangeProbability`] when `p` is outside
    /// `[0, 1]` or NaN.
    fn try_inverse_cdf(&self, p: f64) -> Result<f64>;

    /// Inverse CDF, returning `0.0` and logging a warning on bad input.
    fn inverse_cdf(&self, p: f64) -> f64 {
        match self.try_inverse_cdf(p) {
            Ok(x) => x,
            Err(e) => {
                log::warn!("{} RV #{}: inverse CDF: {e}", self.type_name(), self.tag());
                0.0
            }
        }
    }

    /// Error recorded while constructing this variable, if any.
    ///
    /// A variable carrying an error is in a degenerate state: it still
    /// evaluates, but the results are meaningless.
    fn construction_error(&self) -> Option<&DistributionError>;

    /// Writes a short human-readable description to `sink`.
    fn print(&self, sink: &mut dyn io::Write) -> io::Result<()>;
}

/// Validates a probability argument.
pub(crate) fn check_probability(p: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(DistributionError::OutOfRangeProbability(p))
    }
}

/// Closed set of the random variables provided by this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    Normal(NormalRv),
    Lognormal(LognormalRv),
}

impl Distribution {
    fn inner(&self) -> &dyn RandomVariable {
        match self {
            Distribution::Normal(rv) => rv as &dyn RandomVariable,
            Distribution::Lognormal(rv) => rv as &dyn RandomVariable,
        }
    }
}

impl From<NormalRv> for Distribution {
    fn from(rv: NormalRv) -> Self {
        Distribution::Normal(rv)
    }
}

impl From<LognormalRv> for Distribution {
    fn from(rv: LognormalRv) -> Self {
        Distribution::Lognormal(rv)
    }
}

impl RandomVariable for Distribution {
    fn tag(&self) -> i32 {
        self.inner().tag()
    }

    fn rv_type(&self) -> RandomVariableType {
        self.inner().rv_type()
    }

    fn mean(&self) -> f64 {
        self.inner().mean()
    }

    fn stdv(&self) -> f64 {
        self.inner().stdv()
    }

    fn parameters(&self) -> Vec<f64> {
        self.inner().parameters()
    }

    fn start_value(&self) -> f64 {
        self.inner().start_value()
    }

    fn pdf(&self, x: f64) -> f64 {
        self.inner().pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.inner().cdf(x)
    }

    fn try_inverse_cdf(&self, p: f64) -> Result<f64> {
        self.inner().try_inverse_cdf(p)
    }

    fn construction_error(&self) -> Option<&DistributionError> {
        self.inner().construction_error()
    }

    fn print(&self, sink: &mut dyn io::Write) -> io::Result<()> {
        self.inner().print(sink)
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::Normal(rv) => fmt::Display::fmt(rv, f),
            Distribution::Lognormal(rv) => fmt::Display::fmt(rv, f),
        }
    }
}
