use std::fmt;
use std::str::FromStr;

use nalgebra::Complex;

use crate::math::integration::integrationerror::{
    ConfigurationError,
    DomainError
};

// ─────────────────────────────────────────────────────────────────────────────
// QuadratureRule - 固定步長求積公式
// ─────────────────────────────────────────────────────────────────────────────
//
// 以步長 h = (b - a) / n 沿直線路徑取樣，h 可為複數：
//
//   Midpoint:     h·Σ_{i=0}^{n-1} f(a + (i+½)h)
//   Trapezoidal:  h·[(f(x_0) + f(x_n))/2 + Σ_{i=1}^{n-1} f(x_i)]
//   Simpson 1/3:  h/3·[f(x_0) + f(x_n) + 4·Σ_{i 奇} f(x_i) + 2·Σ_{i 偶, 0<i<n} f(x_i)]
//
// 其中 x_i = a + i·h。Midpoint 取 n 點，其餘取 n+1 點。

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuadratureRule {
    Midpoint,
    Trapezoidal,
    Simpson
}

impl QuadratureRule {
    pub const ALL: [QuadratureRule; 3] = [
        QuadratureRule::Midpoint,
        QuadratureRule::Trapezoidal,
        QuadratureRule::Simpson
    ];

    pub fn name(&self) -> &'static str {
        match self {
            QuadratureRule::Midpoint => "midpoint",
            QuadratureRule::Trapezoidal => "trapezoidal",
            QuadratureRule::Simpson => "simpson"
        }
    }

    pub fn validate(&self, subdivisions: usize) -> Result<(), ConfigurationError> {
        if subdivisions == 0 {
            return Err(ConfigurationError::NonPositiveSubdivisions);
        }
        if *self == QuadratureRule::Simpson && subdivisions % 2 != 0 {
            return Err(ConfigurationError::OddSubdivisionsForSimpson(subdivisions));
        }
        Ok(())
    }

    /// Applies the rule from `a` with step `h` over `subdivisions` panels.
    ///
    /// The caller is expected to have run [`QuadratureRule::validate`]; the
    /// first failing evaluation of `f` aborts the whole sum.
    pub(crate) fn apply<F>(
        &self,
        f: &F,
        a: Complex<f64>,
        h: Complex<f64>,
        subdivisions: usize,
    ) -> Result<Complex<f64>, DomainError>
        where F: Fn(Complex<f64>) -> Result<Complex<f64>, DomainError> {
        match self {
            QuadratureRule::Midpoint => Self::midpoint(f, a, h, subdivisions),
            QuadratureRule::Trapezoidal => Self::trapezoidal(f, a, h, subdivisions),
            QuadratureRule::Simpson => Self::simpson(f, a, h, subdivisions)
        }
    }

    fn midpoint<F>(f: &F, a: Complex<f64>, h: Complex<f64>, n: usize) -> Result<Complex<f64>, DomainError>
        where F: Fn(Complex<f64>) -> Result<Complex<f64>, DomainError> {
        let mut sum = Complex::new(0.0, 0.0);
        for i in 0..n {
            sum += f(a + h * (i as f64 + 0.5))?;
        }
        Ok(sum * h)
    }

    fn trapezoidal<F>(f: &F, a: Complex<f64>, h: Complex<f64>, n: usize) -> Result<Complex<f64>, DomainError>
        where F: Fn(Complex<f64>) -> Result<Complex<f64>, DomainError> {
        let mut sum = (f(a)? + f(a + h * n as f64)?) * 0.5;
        for i in 1..n {
            sum += f(a + h * i as f64)?;
        }
        Ok(sum * h)
    }

    fn simpson<F>(f: &F, a: Complex<f64>, h: Complex<f64>, n: usize) -> Result<Complex<f64>, DomainError>
        where F: Fn(Complex<f64>) -> Result<Complex<f64>, DomainError> {
        let mut sum = f(a)? + f(a + h * n as f64)?;
        for i in 1..n {
            let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
            sum += f(a + h * i as f64)? * weight;
        }
        Ok(sum * h / 3.0)
    }
}

impl fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for QuadratureRule {
    type Err = ConfigurationError;

    fn from_str(rule_str: &str) -> Result<QuadratureRule, ConfigurationError> {
        match rule_str {
            "midpoint" => Ok(QuadratureRule::Midpoint),
            "trapezoidal" => Ok(QuadratureRule::Trapezoidal),
            "simpson" => Ok(QuadratureRule::Simpson),
            _ => Err(ConfigurationError::UnknownRule(rule_str.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_back() {
        for rule in QuadratureRule::ALL {
            assert_eq!(rule.to_string().parse::<QuadratureRule>(), Ok(rule));
        }
    }

    #[test]
    fn test_unknown_names_rejected() {
        for name in ["gauss", "Simpson", "", "trapezoid", " midpoint"] {
            assert_eq!(
                name.parse::<QuadratureRule>(),
                Err(ConfigurationError::UnknownRule(name.to_owned()))
            );
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(QuadratureRule::Midpoint.validate(0), Err(ConfigurationError::NonPositiveSubdivisions));
        assert_eq!(QuadratureRule::Simpson.validate(0), Err(ConfigurationError::NonPositiveSubdivisions));
        assert_eq!(QuadratureRule::Simpson.validate(5), Err(ConfigurationError::OddSubdivisionsForSimpson(5)));
        assert_eq!(QuadratureRule::Simpson.validate(6), Ok(()));
        assert_eq!(QuadratureRule::Trapezoidal.validate(5), Ok(()));
        assert_eq!(QuadratureRule::Midpoint.validate(1), Ok(()));
    }

    #[test]
    fn test_weights_on_two_panels() {
        // f(x_0) = 1, f(x_1) = 2, f(x_2) = 3 on [0, 2]
        let f = |z: Complex<f64>| Ok::<_, DomainError>(z + 1.0);
        let a = Complex::new(0.0, 0.0);
        let h = Complex::new(1.0, 0.0);

        let trapezoidal = QuadratureRule::Trapezoidal.apply(&f, a, h, 2).unwrap();
        assert_eq!(trapezoidal, Complex::new(0.5 * (1.0 + 3.0) + 2.0, 0.0));

        let simpson = QuadratureRule::Simpson.apply(&f, a, h, 2).unwrap();
        assert_eq!(simpson, Complex::new((1.0 + 4.0 * 2.0 + 3.0) / 3.0, 0.0));

        // 中點為 0.5 與 1.5
        let midpoint = QuadratureRule::Midpoint.apply(&f, a, h, 2).unwrap();
        assert_eq!(midpoint, Complex::new(1.5 + 2.5, 0.0));
    }
}
