use nalgebra::Complex;
use tracing::{
    debug,
    warn
};

use crate::math::complex::tocomplex::ToComplex;
use crate::math::integration::integrationerror::{
    ConfigurationError,
    DomainError,
    IntegrationError
};
use crate::math::integration::quadraturerule::QuadratureRule;

pub const DEFAULT_SUBDIVISIONS: usize = 1000;

// ─────────────────────────────────────────────────────────────────────────────
// 一般路徑積分
// ─────────────────────────────────────────────────────────────────────────────
//
//   ∫_a^b f(z) dz，沿 a → b 的直線，h = (b - a) / n ∈ ℂ
//
// 驗證（n > 0、Simpson 需偶數 n）在第一次呼叫 f 之前完成。

/// Integrates `f` along the straight path from `a` to `b`.
///
/// Fails with [`IntegrationError::InvalidConfiguration`] when `subdivisions`
/// is zero or is odd under Simpson's rule; `f` is not evaluated in that case.
pub fn integrate<F, A, B>(
    f: F,
    a: A,
    b: B,
    subdivisions: usize,
    rule: QuadratureRule,
) -> Result<Complex<f64>, IntegrationError>
    where F: Fn(Complex<f64>) -> Complex<f64>,
          A: ToComplex,
          B: ToComplex {
    try_integrate(|z| Ok(f(z)), a, b, subdivisions, rule)
}

/// Same as [`integrate`] for an integrand that may reject a sample point.
///
/// The first [`DomainError`] stops the sum and is returned as
/// [`IntegrationError::Domain`].
pub fn try_integrate<F, A, B>(
    f: F,
    a: A,
    b: B,
    subdivisions: usize,
    rule: QuadratureRule,
) -> Result<Complex<f64>, IntegrationError>
    where F: Fn(Complex<f64>) -> Result<Complex<f64>, DomainError>,
          A: ToComplex,
          B: ToComplex {
    if let Err(error) = rule.validate(subdivisions) {
        warn!(%rule, subdivisions, %error, "rejected quadrature configuration");
        return Err(error.into());
    }
    let a = a.to_complex();
    let b = b.to_complex();
    let h = (b - a) / subdivisions as f64;
    debug!(%rule, subdivisions, %a, %b, %h, "integrating along straight path");
    let value = rule.apply(&f, a, h, subdivisions)?;
    Ok(value)
}

/// Midpoint sum over a real parameter `t ∈ [0, length]`, delegated to the
/// quadrature core with the parameter carried on the real axis.
pub(crate) fn midpoint_over_parameter<G>(
    g: G,
    length: f64,
    subdivisions: usize,
) -> Result<Complex<f64>, IntegrationError>
    where G: Fn(f64) -> Result<Complex<f64>, DomainError> {
    let rule = QuadratureRule::Midpoint;
    if let Err(error) = rule.validate(subdivisions) {
        warn!(subdivisions, %error, "rejected parameterized path");
        return Err(error.into());
    }
    let h = Complex::new(length / subdivisions as f64, 0.0);
    let value = rule.apply(&|t: Complex<f64>| g(t.re), Complex::new(0.0, 0.0), h, subdivisions)?;
    Ok(value)
}

// ─────────────────────────────────────────────────────────────────────────────
// QuadratureSettings
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureSettings {
    rule: QuadratureRule,
    subdivisions: usize
}

impl QuadratureSettings {
    pub fn new(rule: QuadratureRule, subdivisions: usize) -> Result<QuadratureSettings, ConfigurationError> {
        rule.validate(subdivisions)?;
        Ok(QuadratureSettings { rule, subdivisions })
    }

    pub fn rule(&self) -> QuadratureRule {
        self.rule
    }

    pub fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    pub fn integrate<F, A, B>(&self, f: F, a: A, b: B) -> Result<Complex<f64>, IntegrationError>
        where F: Fn(Complex<f64>) -> Complex<f64>,
              A: ToComplex,
              B: ToComplex {
        integrate(f, a, b, self.subdivisions, self.rule)
    }
}

impl Default for QuadratureSettings {
    fn default() -> QuadratureSettings {
        QuadratureSettings { rule: QuadratureRule::Simpson, subdivisions: DEFAULT_SUBDIVISIONS }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use approx::assert_abs_diff_eq;

    use super::*;

    fn real_square(z: Complex<f64>) -> Complex<f64> {
        Complex::new(z.re * z.re, 0.0)
    }

    #[test]
    fn test_square_on_real_axis() {
        let simpson = integrate(real_square, 0.0, 2.0, 1000, QuadratureRule::Simpson).unwrap();
        assert_abs_diff_eq!(simpson.re, 8.0 / 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(simpson.im, 0.0, epsilon = 1e-12);

        // 誤差上界 (b - a)·h²/12·max|f''| = 2·(0.002)²/12·2 ≈ 1.34e-6
        let trapezoidal = integrate(real_square, 0.0, 2.0, 1000, QuadratureRule::Trapezoidal).unwrap();
        assert_abs_diff_eq!(trapezoidal.re, 8.0 / 3.0, epsilon = 1.5e-6);

        let midpoint = integrate(real_square, 0.0, 2.0, 1000, QuadratureRule::Midpoint).unwrap();
        assert_abs_diff_eq!(midpoint.re, 8.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_midpoint_samples_true_midpoints() {
        // 單一區間 [10, 11]：中點 10.5
        let value = integrate(|z| z, 10.0, 11.0, 1, QuadratureRule::Midpoint).unwrap();
        assert_eq!(value, Complex::new(10.5, 0.0));
    }

    #[test]
    fn test_polynomial_along_complex_path() {
        // ∫_0^{1+i} (z+1)² dz = ((2+i)³ - 1) / 3 = (1 + 11i) / 3
        let f = |z: Complex<f64>| (z + 1.0) * (z + 1.0);
        let expected = Complex::new(1.0 / 3.0, 11.0 / 3.0);
        let b = Complex::new(1.0, 1.0);

        let simpson = integrate(f, 0.0, b, 1000, QuadratureRule::Simpson).unwrap();
        assert_abs_diff_eq!((simpson - expected).norm(), 0.0, epsilon = 1e-10);

        for rule in [QuadratureRule::Midpoint, QuadratureRule::Trapezoidal] {
            let value = integrate(f, 0.0, b, 1000, rule).unwrap();
            assert_abs_diff_eq!((value - expected).norm(), 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_identity_along_imaginary_axis() {
        // ∫_0^i z dz = i²/2 = -1/2
        let value = integrate(|z| z, 0, Complex::new(0.0, 1.0), 10, QuadratureRule::Trapezoidal).unwrap();
        assert_abs_diff_eq!((value - Complex::new(-0.5, 0.0)).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_rejects_every_odd_subdivision_count() {
        let calls = Cell::new(0_usize);
        let f = |z: Complex<f64>| {
            calls.set(calls.get() + 1);
            z
        };
        for n in (1..200).step_by(2) {
            let result = integrate(f, 0.0, 1.0, n, QuadratureRule::Simpson);
            assert_eq!(
                result,
                Err(IntegrationError::InvalidConfiguration(ConfigurationError::OddSubdivisionsForSimpson(n)))
            );
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_zero_subdivisions_rejected_for_every_rule() {
        for rule in QuadratureRule::ALL {
            let result = integrate(|z| z, 0.0, 1.0, 0, rule);
            assert_eq!(
                result,
                Err(IntegrationError::InvalidConfiguration(ConfigurationError::NonPositiveSubdivisions))
            );
        }
    }

    #[test]
    fn test_evaluation_counts() {
        for rule in QuadratureRule::ALL {
            let calls = Cell::new(0_usize);
            let f = |z: Complex<f64>| {
                calls.set(calls.get() + 1);
                z.exp()
            };
            integrate(f, 0.0, 1.0, 10, rule).unwrap();
            let expected = if rule == QuadratureRule::Midpoint { 10 } else { 11 };
            assert_eq!(calls.get(), expected, "{}", rule);
        }
    }

    #[test]
    fn test_trapezoidal_and_simpson_agree_as_subdivisions_grow() {
        let f = |z: Complex<f64>| z.cos() * (z * 0.5).exp();
        let b = Complex::new(1.0, 0.5);
        let mut previous_gap = f64::INFINITY;
        for n in [100, 1000, 10000] {
            let trapezoidal = integrate(f, 0.0, b, n, QuadratureRule::Trapezoidal).unwrap();
            let simpson = integrate(f, 0.0, b, n, QuadratureRule::Simpson).unwrap();
            let gap = (trapezoidal - simpson).norm();
            assert!(gap < 1e-4, "n = {}: gap {}", n, gap);
            assert!(gap < previous_gap);
            previous_gap = gap;
        }
    }

    #[test]
    fn test_domain_error_propagates_without_partial_result() {
        // x_1 = 0 落在極點上
        let reciprocal = |z: Complex<f64>| {
            if z.norm() < 1e-12 {
                Err(DomainError::new(z, "division by zero"))
            } else {
                Ok(z.inv())
            }
        };
        let result = try_integrate(reciprocal, -1.0, 1.0, 2, QuadratureRule::Trapezoidal);
        match result {
            Err(IntegrationError::Domain(error)) => {
                assert_eq!(error.point(), Complex::new(0.0, 0.0));
                assert_eq!(error.reason(), "division by zero");
            },
            other => panic!("expected domain error, got {:?}", other)
        }

        // 中點法避開 0
        let value = try_integrate(reciprocal, -1.0, 1.0, 2, QuadratureRule::Midpoint).unwrap();
        assert_abs_diff_eq!(value.norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nan_from_integrand_propagates() {
        let value = integrate(|_| Complex::new(f64::NAN, 0.0), 0.0, 1.0, 4, QuadratureRule::Simpson).unwrap();
        assert!(value.re.is_nan());
    }

    #[test]
    fn test_settings() {
        let settings = QuadratureSettings::default();
        assert_eq!(settings.rule(), QuadratureRule::Simpson);
        assert_eq!(settings.subdivisions(), DEFAULT_SUBDIVISIONS);

        let value = settings.integrate(real_square, 0.0, 2.0).unwrap();
        assert_abs_diff_eq!(value.re, 8.0 / 3.0, epsilon = 1e-6);

        assert_eq!(
            QuadratureSettings::new(QuadratureRule::Simpson, 7),
            Err(ConfigurationError::OddSubdivisionsForSimpson(7))
        );
    }
}
