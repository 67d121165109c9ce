//! Two-parameter lognormal random variable with a sign-extended domain.
//!
//! `ln|X| ~ N(λ, ζ²)`. A *negative* lognormal is the mirror image of a
//! positive one and lives on `(−∞, 0)`. All evaluation goes through
//! [`STANDARD_NORMAL`].
//!
//! # Compatibility notes
//!
//! The numeric behaviour below is relied on by existing reliability
//! models and is reproduced exactly, including its oddities:
//!
//! - [`from_moments`](LognormalRv::from_moments) reads the domain from the
//!   sign of the mean; [`from_parameters`](LognormalRv::from_parameters)
//!   reads it from the sign of `λ` and stores `|λ|`.
//! - The negative-domain PDF evaluates the positive PDF at `−x` rather
//!   than the formal reflection.
//! - The negative-domain CDF applies a second `1 − F` on top of the
//!   branch result, so for a negative variable
//!   `cdf(inverse_cdf(p)) == 1 − p`.

use std::fmt;
use std::io;

use crate::error::{DistributionError, Result};
use crate::normal::STANDARD_NORMAL;
use crate::random_variable::{check_probability, RandomVariable, RandomVariableType};

/// Lognormal random variable identified by a registry tag.
///
/// Native parameters are `[λ, ζ]`, always those of the positive-domain
/// variable.
#[derive(Debug, Clone, PartialEq)]
pub struct LognormalRv {
    tag: i32,
    lambda: f64,
    zeta: f64,
    is_positive: bool,
    start_value: f64,
    error: Option<DistributionError>,
}

impl LognormalRv {
    /// Creates a lognormal variable matching a signed mean and a standard
    /// deviation.
    ///
    /// A negative `mean` selects the mirrored domain; its magnitude goes
    /// through moment matching. A zero mean is recorded as
    /// [`DistributionError::InvalidMoments`] and leaves non-finite
    /// parameters behind.
    ///
    /// # Examples
    /// ```
    /// use reliability_distributions::{LognormalRv, RandomVariable};
    /// let rv = LognormalRv::from_moments(1, 100.0, 20.0);
    /// assert!((rv.mean() - 100.0).abs() < 1e-9);
    /// assert!((rv.stdv() - 20.0).abs() < 1e-9);
    /// ```
    pub fn from_moments(tag: i32, mean: f64, stdv: f64) -> Self {
        let (is_positive, magnitude) = if mean < 0.0 { (false, -mean) } else { (true, mean) };

        let mut rv = Self {
            tag,
            lambda: 0.0,
            zeta: 0.0,
            is_positive,
            start_value: 0.0,
            error: None,
        };
        if let Err(e) = rv.set_parameters(magnitude, stdv) {
            log::error!("Lognormal RV #{tag}: moment matching failed: {e}");
            rv.error = Some(e);
        }
        rv
    }

    /// Creates a lognormal variable from `[λ, ζ]`.
    ///
    /// A negative `λ` selects the mirrored domain and `|λ|` is stored. Any
    /// length other than two leaves the variable degenerate
    /// (`λ = ζ = 0`, positive domain) with
    /// [`DistributionError::InvalidParameterCount`] recorded. Evaluating a
    /// degenerate variable does not panic but yields NaN or meaningless
    /// values.
    pub fn from_parameters(tag: i32, parameters: &[f64]) -> Self {
        let mut rv = Self {
            tag,
            lambda: 0.0,
            zeta: 0.0,
            is_positive: true,
            start_value: 0.0,
            error: None,
        };
        match *parameters {
            [lambda, zeta] => {
                rv.is_positive = lambda >= 0.0;
                rv.lambda = lambda.abs();
                rv.zeta = zeta;
            }
            _ => {
                let e = DistributionError::InvalidParameterCount {
                    expected: 2,
                    got: parameters.len(),
                };
                log::error!("Lognormal RV #{tag} requires lambda and zeta: {e}");
                rv.error = Some(e);
            }
        }
        rv
    }

    /// Moment matching for a positive mean `m` and standard deviation `s`:
    ///
    /// ```text
    /// ζ = √ln(1 + (s/m)²)
    /// λ = ln(m) − ζ²/2
    /// ```
    ///
    /// The computed values are stored even on failure.
    ///
    /// # Errors
    /// [`DistributionError::InvalidMoments`] if `m ≤ 0` or the result is not
    /// finite.
    fn set_parameters(&mut self, mean: f64, stdv: f64) -> Result<()> {
        let cov = stdv / mean;
        let zeta2 = (cov * cov).ln_1p();
        self.zeta = zeta2.sqrt();
        self.lambda = mean.ln() - 0.5 * zeta2;

        if mean > 0.0 && self.zeta.is_finite() && self.lambda.is_finite() {
            Ok(())
        } else {
            Err(DistributionError::InvalidMoments { mean, stdv })
        }
    }

    /// Sets the seed value handed to iterative consumers.
    pub fn with_start_value(mut self, start_value: f64) -> Self {
        self.start_value = start_value;
        self
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn zeta(&self) -> f64 {
        self.zeta
    }

    /// `true` for support `(0, ∞)`, `false` for `(−∞, 0)`.
    pub fn is_positive(&self) -> bool {
        self.is_positive
    }

    /// `exp(λ + ζ²/2)`, the magnitude of the mean.
    fn mean_magnitude(&self) -> f64 {
        (self.lambda + 0.5 * self.zeta * self.zeta).exp()
    }

    fn standardize(&self, magnitude: f64) -> f64 {
        (magnitude.ln() - self.lambda) / self.zeta
    }
}

impl RandomVariable for LognormalRv {
    fn tag(&self) -> i32 {
        self.tag
    }

    fn rv_type(&self) -> RandomVariableType {
        RandomVariableType::Lognormal
    }

    fn mean(&self) -> f64 {
        if self.is_positive {
            self.mean_magnitude()
        } else {
            -self.mean_magnitude()
        }
    }

    fn stdv(&self) -> f64 {
        self.mean_magnitude() * (self.zeta * self.zeta).exp_m1().sqrt()
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.lambda, self.zeta]
    }

    fn start_value(&self) -> f64 {
        self.start_value
    }

    fn pdf(&self, x: f64) -> f64 {
        // Plain substitution, not the formal f_pos(x + 2|x|) reflection.
        let x = if self.is_positive { x } else { -x };
        if x > 0.0 {
            STANDARD_NORMAL.pdf(self.standardize(x)) / (self.zeta * x)
        } else {
            0.0
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        let result = if self.is_positive {
            if x > 0.0 {
                STANDARD_NORMAL.cdf(self.standardize(x))
            } else {
                0.0
            }
        } else if x < 0.0 {
            1.0 - STANDARD_NORMAL.cdf(self.standardize(x.abs()))
        } else {
            1.0
        };

        // Second flip on top of the branch result; the two do not cancel.
        if self.is_positive {
            result
        } else {
            1.0 - result
        }
    }

    fn try_inverse_cdf(&self, p: f64) -> Result<f64> {
        if self.is_positive {
            let z = STANDARD_NORMAL.try_inverse_cdf(p)?;
            Ok((z * self.zeta + self.lambda).exp())
        } else {
            check_probability(p)?;
            let z = STANDARD_NORMAL.try_inverse_cdf(1.0 - p)?;
            Ok(-(z * self.zeta + self.lambda).exp())
        }
    }

    fn construction_error(&self) -> Option<&DistributionError> {
        self.error.as_ref()
    }

    fn print(&self, sink: &mut dyn io::Write) -> io::Result<()> {
        write!(sink, "{self}")
    }
}

impl fmt::Display for LognormalRv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lognormal RV #{}", self.tag)?;
        writeln!(f, "\tlambda = {}", self.lambda)?;
        writeln!(f, "\tzeta = {}", self.zeta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn lognormal_100_20() -> LognormalRv {
        LognormalRv::from_moments(1, 100.0, 20.0)
    }

    // --- construction ---

    #[test]
    fn test_moment_matching_scenario() {
        let rv = lognormal_100_20();
        assert_eq!(rv.type_name(), "LOGNORMAL");
        assert!(rv.is_positive());
        assert!(rv.construction_error().is_none());
        assert_abs_diff_eq!(rv.zeta(), 0.198_042_2, epsilon = 1e-6);
        assert_abs_diff_eq!(rv.lambda(), 4.585_559_8, epsilon = 1e-6);
        assert_relative_eq!(rv.mean(), 100.0, max_relative = 1e-12);
        assert_relative_eq!(rv.stdv(), 20.0, max_relative = 1e-12);
    }

    #[test]
    fn test_moment_consistency_10_2() {
        let rv = LognormalRv::from_moments(2, 10.0, 2.0);
        assert_abs_diff_eq!(rv.mean(), 10.0, epsilon = 1e-6);
        assert_abs_diff_eq!(rv.stdv(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_mean_selects_mirrored_domain() {
        let rv = LognormalRv::from_moments(3, -10.0, 2.0);
        assert!(!rv.is_positive());
        assert_abs_diff_eq!(rv.mean(), -10.0, epsilon = 1e-6);
        assert_abs_diff_eq!(rv.stdv(), 2.0, epsilon = 1e-6);
        // Shape parameters are those of the positive mirror image.
        let pos = LognormalRv::from_moments(4, 10.0, 2.0);
        assert_eq!(rv.parameters(), pos.parameters());
    }

    #[test]
    fn test_parameter_vector_sign_from_lambda() {
        let rv = LognormalRv::from_parameters(5, &[-1.0, 0.3]);
        assert!(!rv.is_positive());
        assert_eq!(rv.lambda(), 1.0);
        assert_eq!(rv.parameters(), vec![1.0, 0.3]);
        assert!(rv.construction_error().is_none());

        let rv = LognormalRv::from_parameters(6, &[1.0, 0.3]);
        assert!(rv.is_positive());
        assert_relative_eq!(rv.mean(), (1.0_f64 + 0.045).exp(), max_relative = 1e-14);
    }

    #[test]
    fn test_sign_conventions_differ_between_constructors() {
        // A positive-mean lognormal can have a negative log-mean.
        let by_moments = LognormalRv::from_moments(7, 0.5, 0.1);
        assert!(by_moments.lambda() < 0.0);
        assert!(by_moments.is_positive());

        // Feeding those parameters back flips the domain.
        let by_params = LognormalRv::from_parameters(8, &by_moments.parameters());
        assert!(!by_params.is_positive());
        assert_eq!(by_params.lambda(), -by_moments.lambda());
    }

    #[test]
    fn test_wrong_parameter_count_is_degenerate() {
        let rv = LognormalRv::from_parameters(9, &[1.0, 0.2, 3.0]);
        assert_eq!(rv.parameters(), vec![0.0, 0.0]);
        assert_eq!(rv.type_name(), "LOGNORMAL");
        assert!(rv.is_positive());
        assert_eq!(
            rv.construction_error(),
            Some(&DistributionError::InvalidParameterCount { expected: 2, got: 3 })
        );

        // Still evaluates without panicking.
        let _ = rv.pdf(1.0);
        let _ = rv.cdf(1.0);
        let _ = rv.inverse_cdf(0.5);

        let empty = LognormalRv::from_parameters(10, &[]);
        assert_eq!(
            empty.construction_error(),
            Some(&DistributionError::InvalidParameterCount { expected: 2, got: 0 })
        );
    }

    #[test]
    fn test_zero_mean_reports_invalid_moments() {
        let rv = LognormalRv::from_moments(11, 0.0, 2.0);
        assert!(matches!(
            rv.construction_error(),
            Some(DistributionError::InvalidMoments { .. })
        ));
        assert!(rv.is_positive());
        assert!(!rv.lambda().is_finite());
        assert!(!rv.zeta().is_finite());
    }

    #[test]
    fn test_start_value() {
        assert_eq!(lognormal_100_20().start_value(), 0.0);
        let rv = lognormal_100_20().with_start_value(100.0);
        assert_eq!(rv.start_value(), 100.0);
    }

    // --- positive domain evaluation ---

    #[test]
    fn test_positive_cdf_values() {
        let rv = lognormal_100_20();
        // Mean lies above the median exp(λ).
        let c = rv.cdf(100.0);
        assert!(c > 0.5);
        assert_abs_diff_eq!(c, 0.539_439, epsilon = 1e-5);
        assert_abs_diff_eq!(rv.cdf(rv.lambda().exp()), 0.5, epsilon = 1e-8);
        assert_eq!(rv.cdf(0.0), 0.0);
        assert_eq!(rv.cdf(-5.0), 0.0);
        assert_eq!(rv.cdf(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_positive_inverse_cdf_median() {
        let rv = lognormal_100_20();
        let median = rv.inverse_cdf(0.5);
        assert_relative_eq!(median, rv.lambda().exp(), max_relative = 1e-14);
        assert_abs_diff_eq!(median, 98.058, epsilon = 1e-3);
        assert_eq!(rv.inverse_cdf(0.0), 0.0);
        assert_eq!(rv.inverse_cdf(1.0), f64::INFINITY);
    }

    #[test]
    fn test_positive_pdf() {
        let rv = LognormalRv::from_parameters(12, &[0.0, 1.0]);
        // f(1) = 1/√(2π) for λ = 0, ζ = 1.
        assert_abs_diff_eq!(rv.pdf(1.0), 0.398_942_280_401_432_7, epsilon = 1e-15);
        assert_eq!(rv.pdf(0.0), 0.0);
        assert_eq!(rv.pdf(-1.0), 0.0);
    }

    #[test]
    fn test_positive_cdf_monotonic() {
        let rv = lognormal_100_20();
        let mut prev = 0.0;
        for i in 0..=400 {
            let x = i as f64 * 0.5;
            let c = rv.cdf(x);
            assert!(c >= prev, "CDF not monotonic at x={x}");
            prev = c;
        }
        assert!(rv.cdf(1e-3) < 1e-12);
        assert!(rv.cdf(1e4) > 1.0 - 1e-12);
    }

    // --- negative domain evaluation ---

    #[test]
    fn test_negative_pdf_mirrors_positive() {
        let neg = LognormalRv::from_moments(13, -10.0, 2.0);
        let pos = LognormalRv::from_moments(14, 10.0, 2.0);
        for &x in &[0.5, 5.0, 9.0, 10.0, 15.0] {
            assert_eq!(neg.pdf(-x), pos.pdf(x));
        }
        assert_eq!(neg.pdf(3.0), 0.0);
        assert_eq!(neg.pdf(0.0), 0.0);
    }

    #[test]
    fn test_negative_cdf_double_flip() {
        let neg = LognormalRv::from_moments(15, -10.0, 2.0);
        let pos = LognormalRv::from_moments(16, 10.0, 2.0);

        // On (−∞, 0) the two flips give F_pos(|x|).
        for &x in &[-0.5, -5.0, -9.0, -10.0, -15.0] {
            assert_abs_diff_eq!(neg.cdf(x), pos.cdf(-x), epsilon = 1e-15);
        }
        // On [0, ∞) the branch value 1 is flipped to 0.
        assert_eq!(neg.cdf(0.0), 0.0);
        assert_eq!(neg.cdf(7.0), 0.0);

        // Net shape: decreasing towards zero from the left.
        assert!(neg.cdf(-15.0) > neg.cdf(-10.0));
        assert!(neg.cdf(-10.0) > neg.cdf(-5.0));
        assert!(neg.cdf(-1e6) > 1.0 - 1e-12);
        assert!(neg.cdf(-1e-6) < 1e-12);
    }

    #[test]
    fn test_negative_inverse_cdf() {
        let neg = LognormalRv::from_parameters(17, &[-1.0, 0.3]);
        let pos = LognormalRv::from_parameters(18, &[1.0, 0.3]);
        for &p in &[0.01, 0.2, 0.5, 0.8, 0.99] {
            assert_eq!(neg.inverse_cdf(p), -pos.inverse_cdf(1.0 - p));
            assert!(neg.inverse_cdf(p) < 0.0);
        }
        assert_relative_eq!(neg.inverse_cdf(0.5), -(1.0_f64).exp(), max_relative = 1e-14);
        assert_eq!(neg.inverse_cdf(0.0), f64::NEG_INFINITY);
        assert_eq!(neg.inverse_cdf(1.0), -0.0);
    }

    #[test]
    fn test_negative_roundtrip_returns_complement() {
        let neg = LognormalRv::from_moments(19, -50.0, 5.0);
        for &p in &[0.01, 0.1, 0.3, 0.5, 0.7, 0.9, 0.99] {
            let x = neg.inverse_cdf(p);
            assert_abs_diff_eq!(neg.cdf(x), 1.0 - p, epsilon = 1e-9);
        }
    }

    // --- errors and diagnostics ---

    #[test]
    fn test_out_of_range_probability() {
        for rv in [lognormal_100_20(), LognormalRv::from_moments(20, -10.0, 2.0)] {
            assert_eq!(rv.inverse_cdf(1.5), 0.0);
            assert_eq!(rv.inverse_cdf(-0.1), 0.0);
            assert_eq!(
                rv.try_inverse_cdf(1.5),
                Err(DistributionError::OutOfRangeProbability(1.5))
            );
            assert_eq!(
                rv.try_inverse_cdf(-0.1),
                Err(DistributionError::OutOfRangeProbability(-0.1))
            );
        }
    }

    #[test]
    fn test_print() {
        let rv = LognormalRv::from_parameters(21, &[2.5, 0.25]);
        let mut buf = Vec::new();
        rv.print(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Lognormal RV #21\n\tlambda = 2.5\n\tzeta = 0.25\n");
        assert_eq!(rv.to_string(), text);
    }
}
