use nalgebra::Complex;
use tracing::debug;

use crate::math::complex::tocomplex::ToComplex;
use crate::math::integration::integrationerror::{
    DomainError,
    IntegrationError
};
use crate::math::integration::quadrature::midpoint_over_parameter;

// ─────────────────────────────────────────────────────────────────────────────
// 線段積分
// ─────────────────────────────────────────────────────────────────────────────
//
//   z(t) = start + t·(end - start),  t ∈ [0, 1]
//   ∫ f(z) dz = ∫_0^1 f(z(t))·(end - start) dt
//
// 對 t 使用中點法，h = 1/n，t_i = (i + ½)·h。

pub fn line_integral<F, S, E>(
    f: F,
    start: S,
    end: E,
    subdivisions: usize,
) -> Result<Complex<f64>, IntegrationError>
    where F: Fn(Complex<f64>) -> Complex<f64>,
          S: ToComplex,
          E: ToComplex {
    try_line_integral(|z| Ok(f(z)), start, end, subdivisions)
}

/// Line integral with an integrand that may reject a sample point.
///
/// A degenerate segment (`start == end`) yields zero for any valid
/// `subdivisions` without evaluating `f`.
pub fn try_line_integral<F, S, E>(
    f: F,
    start: S,
    end: E,
    subdivisions: usize,
) -> Result<Complex<f64>, IntegrationError>
    where F: Fn(Complex<f64>) -> Result<Complex<f64>, DomainError>,
          S: ToComplex,
          E: ToComplex {
    let start = start.to_complex();
    let end = end.to_complex();
    let dz_dt = end - start;
    if subdivisions > 0 && start == end {
        debug!(%start, subdivisions, "degenerate segment");
        return Ok(Complex::new(0.0, 0.0));
    }
    debug!(%start, %end, subdivisions, "integrating along segment");
    midpoint_over_parameter(
        |t| Ok(f(start + dz_dt * t)? * dz_dt),
        1.0,
        subdivisions,
    )
}
