//! # reliability-distributions
//!
//! Parametric continuous random variables for structural reliability
//! analysis (FORM, SORM, Monte Carlo, transformation to standard normal
//! space).
//!
//! Every variable exposes the same contract through [`RandomVariable`]:
//! moments, native parameters, PDF, CDF and inverse CDF. Evaluation
//! composes with the shared [`STANDARD_NORMAL`] evaluator.
//!
//! ## Modules
//!
//! - [`special`]: Φ, φ and Φ⁻¹ approximations
//! - [`normal`]: [`StandardNormal`] and the tagged [`NormalRv`]
//! - [`lognormal`]: [`LognormalRv`] with sign-extended domain
//! - [`random_variable`]: the capability trait and the closed [`Distribution`] set
//! - [`error`]: [`DistributionError`]
//!
//! ## Error policy
//!
//! - Construction never fails. Bad input leaves a degenerate variable whose
//!   [`RandomVariable::construction_error`] reports what went wrong.
//! - [`RandomVariable::try_inverse_cdf`] returns typed errors;
//!   [`RandomVariable::inverse_cdf`] returns `0.0` and logs through `log`.
//!
//! ```
//! use reliability_distributions::{Distribution, LognormalRv, NormalRv, RandomVariable};
//!
//! let rvs: Vec<Distribution> = vec![
//!     NormalRv::new(1, 50.0, 5.0).into(),
//!     LognormalRv::from_moments(2, 100.0, 20.0).into(),
//! ];
//! for rv in &rvs {
//!     let x = rv.inverse_cdf(0.9);
//!     assert!((rv.cdf(x) - 0.9).abs() < 1e-9);
//! }
//! ```

pub mod error;
pub mod lognormal;
pub mod normal;
pub mod random_variable;
pub mod special;

pub use error::{DistributionError, Result};
pub use lognormal::LognormalRv;
pub use normal::{NormalRv, StandardNormal, STANDARD_NORMAL};
pub use random_variable::{Distribution, RandomVariable, RandomVariableType};
