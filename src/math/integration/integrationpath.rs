use nalgebra::Complex;

use crate::math::integration::contourintegral::try_contour_integral;
use crate::math::integration::integrationerror::{
    ConfigurationError,
    DomainError,
    IntegrationError
};
use crate::math::integration::lineintegral::try_line_integral;
use crate::math::integration::quadrature::{
    QuadratureSettings,
    try_integrate
};

/// One of the three supported integration paths, with its discretization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntegrationPath {
    General {
        a: Complex<f64>,
        b: Complex<f64>,
        settings: QuadratureSettings
    },
    LineSegment {
        start: Complex<f64>,
        end: Complex<f64>,
        subdivisions: usize
    },
    CircularContour {
        center: Complex<f64>,
        radius: f64,
        subdivisions: usize
    }
}

impl IntegrationPath {
    pub fn general(a: Complex<f64>, b: Complex<f64>, settings: QuadratureSettings) -> IntegrationPath {
        IntegrationPath::General { a, b, settings }
    }

    pub fn line_segment(start: Complex<f64>, end: Complex<f64>, subdivisions: usize) -> Result<IntegrationPath, ConfigurationError> {
        if subdivisions == 0 {
            return Err(ConfigurationError::NonPositiveSubdivisions);
        }
        Ok(IntegrationPath::LineSegment { start, end, subdivisions })
    }

    pub fn circular_contour(center: Complex<f64>, radius: f64, subdivisions: usize) -> Result<IntegrationPath, ConfigurationError> {
        if subdivisions == 0 {
            return Err(ConfigurationError::NonPositiveSubdivisions);
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConfigurationError::InvalidRadius(radius));
        }
        Ok(IntegrationPath::CircularContour { center, radius, subdivisions })
    }

    pub fn subdivisions(&self) -> usize {
        match self {
            IntegrationPath::General { settings, .. } => settings.subdivisions(),
            IntegrationPath::LineSegment { subdivisions, .. } => *subdivisions,
            IntegrationPath::CircularContour { subdivisions, .. } => *subdivisions
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, IntegrationPath::CircularContour { .. })
    }

    pub fn integrate<F>(&self, f: F) -> Result<Complex<f64>, IntegrationError>
        where F: Fn(Complex<f64>) -> Complex<f64> {
        self.try_integrate(|z| Ok(f(z)))
    }

    pub fn try_integrate<F>(&self, f: F) -> Result<Complex<f64>, IntegrationError>
        where F: Fn(Complex<f64>) -> Result<Complex<f64>, DomainError> {
        match *self {
            IntegrationPath::General { a, b, settings } => {
                try_integrate(f, a, b, settings.subdivisions(), settings.rule())
            },
            IntegrationPath::LineSegment { start, end, subdivisions } => {
                try_line_integral(f, start, end, subdivisions)
            },
            IntegrationPath::CircularContour { center, radius, subdivisions } => {
                try_contour_integral(f, center, radius, subdivisions)
            }
        }
    }
}
