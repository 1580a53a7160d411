use nalgebra::Complex;

use crate::math::integration::integrationerror::DomainError;

/// 距原點小於此值視為落在 1/z 的極點上
pub const POLE_TOLERANCE: f64 = 1e-10;

/// z² + 2z + 1
pub fn polynomial(z: Complex<f64>) -> Complex<f64> {
    z * z + z * 2.0 + 1.0
}

/// e^z
pub fn exponential(z: Complex<f64>) -> Complex<f64> {
    z.exp()
}

/// 1 / (z² + 1), poles at ±i
pub fn rational(z: Complex<f64>) -> Complex<f64> {
    (z * z + 1.0).inv()
}

/// 1 / z, rejecting points within [`POLE_TOLERANCE`] of the origin.
pub fn reciprocal(z: Complex<f64>) -> Result<Complex<f64>, DomainError> {
    if z.norm() < POLE_TOLERANCE {
        return Err(DomainError::new(z, "division by zero at the pole of 1/z"));
    }
    Ok(z.inv())
}
