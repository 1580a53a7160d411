use std::error::Error;
use std::f64::consts::PI;

use nalgebra::Complex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use complexquad::configuration::Configuration;
use complexquad::manager::manager::IManager;
use complexquad::math::integration::contourintegral::{
    contour_integral,
    try_contour_integral
};
use complexquad::math::integration::examplefunctions::{
    exponential,
    polynomial,
    rational,
    reciprocal
};
use complexquad::math::integration::lineintegral::line_integral;
use complexquad::math::integration::quadrature::integrate;
use complexquad::math::integration::quadraturerule::QuadratureRule;

fn run_examples() -> Result<(), Box<dyn Error>> {
    println!("Complex Function Integration Examples");
    println!("{}", "=".repeat(40));

    let one_plus_i = Complex::new(1.0, 1.0);
    let value = integrate(polynomial, 0.0, one_plus_i, 1000, QuadratureRule::Simpson)?;
    println!("∫(z² + 2z + 1)dz from 0 to 1+i = {}", value);

    let value = line_integral(exponential, 0.0, Complex::new(0.0, PI), 1000)?;
    println!("Line integral of e^z from 0 to iπ = {}", value);

    // 極點 ±i 恰好落在單位圓上
    let value = contour_integral(rational, 0.0, 1.0, 1000)?;
    println!("Contour integral of 1/(z²+1) around unit circle = {}", value);

    let expected = Complex::new(0.0, 2.0 * PI);
    let value = try_contour_integral(reciprocal, 0.0, 1.0, 2000)?;
    println!("1/z contour integral: {} (expected: {})", value, expected);
    println!("Difference: {:e}", (value - expected).norm());
    Ok(())
}

fn run_configuration(file_path: &str) -> Result<(), Box<dyn Error>> {
    let config = Configuration::new();
    config.from_reader(file_path)?;

    let path_manager = config.integration_path_manager();
    for name in path_manager.names() {
        let path = path_manager.get(&name)?;
        let value = path.integrate(exponential)?;
        println!("{}: ∫ e^z dz = {}", name, value);
    }

    let settings_manager = config.quadrature_settings_manager();
    let one_plus_i = Complex::new(1.0, 1.0);
    for name in settings_manager.names() {
        let settings = settings_manager.get(&name)?;
        let value = settings.integrate(exponential, 0.0, one_plus_i)?;
        println!("{} ({}, n = {}): ∫_0^(1+i) e^z dz = {}", name, settings.rule(), settings.subdivisions(), value);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    run_examples()?;

    if let Some(file_path) = std::env::args().nth(1) {
        info!(path = %file_path, "integrating configured paths");
        run_configuration(&file_path)?;
    }
    Ok(())
}
