use std::f64::consts::PI;

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
use crate::math::integration::quadrature::midpoint_over_parameter;

// ─────────────────────────────────────────────────────────────────────────────
// 圓周圍道積分
// ─────────────────────────────────────────────────────────────────────────────
//
//   z(θ) = c + r·e^{iθ},  θ ∈ [0, 2π]
//   ∮ f(z) dz = ∫_0^{2π} f(z(θ))·i·r·e^{iθ} dθ
//
// 對 θ 使用中點法，h = 2π/n，θ_i = (i + ½)·h。
// 被積函數為週期函數，中點法在此具有幾何收斂速度。

pub fn contour_integral<F, C>(
    f: F,
    center: C,
    radius: f64,
    subdivisions: usize,
) -> Result<Complex<f64>, IntegrationError>
    where F: Fn(Complex<f64>) -> Complex<f64>,
          C: ToComplex {
    try_contour_integral(|z| Ok(f(z)), center, radius, subdivisions)
}

/// Counter-clockwise integral around the circle of `radius` about `center`.
///
/// `radius` must be positive and finite; anything else is rejected before
/// `f` is evaluated.
pub fn try_contour_integral<F, C>(
    f: F,
    center: C,
    radius: f64,
    subdivisions: usize,
) -> Result<Complex<f64>, IntegrationError>
    where F: Fn(Complex<f64>) -> Result<Complex<f64>, DomainError>,
          C: ToComplex {
    if !(radius.is_finite() && radius > 0.0) {
        let error = ConfigurationError::InvalidRadius(radius);
        warn!(radius, %error, "rejected circular contour");
        return Err(error.into());
    }
    let center = center.to_complex();
    debug!(%center, radius, subdivisions, "integrating around circle");
    midpoint_over_parameter(
        |theta| {
            let offset = Complex::from_polar(radius, theta);
            let dz_dtheta = Complex::new(0.0, 1.0) * offset;
            Ok(f(center + offset)? * dz_dtheta)
        },
        2.0 * PI,
        subdivisions,
    )
}
