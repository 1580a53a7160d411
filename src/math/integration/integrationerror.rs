use nalgebra::Complex;
use thiserror::Error;

/// 設定錯誤：在任何取樣開始前就會被偵測
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("unknown quadrature rule '{0}', expected 'midpoint', 'trapezoidal' or 'simpson'")]
    UnknownRule(String),
    #[error("Simpson's rule requires an even number of subdivisions, got {0}")]
    OddSubdivisionsForSimpson(usize),
    #[error("number of subdivisions must be positive")]
    NonPositiveSubdivisions,
    #[error("contour radius must be positive and finite, got {0}")]
    InvalidRadius(f64)
}

/// Raised by a fallible integrand at a sample point it cannot evaluate.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("integrand undefined at {point}: {reason}")]
pub struct DomainError {
    point: Complex<f64>,
    reason: String
}

impl DomainError {
    pub fn new(point: Complex<f64>, reason: impl Into<String>) -> DomainError {
        DomainError { point, reason: reason.into() }
    }

    pub fn point(&self) -> Complex<f64> {
        self.point
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),
    #[error(transparent)]
    Domain(#[from] DomainError)
}
