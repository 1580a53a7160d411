use nalgebra::Complex;
use serde::{
    Deserialize,
    Deserializer
};

// ─────────────────────────────────────────────────────────────────────────────
// ToComplex
// ─────────────────────────────────────────────────────────────────────────────
//
// 積分端點可由實數、整數或複數給定，一律轉成 Complex<f64>：
//   2.0      -> 2 + 0i
//   3_i32    -> 3 + 0i
//   1 + 1i   -> 1 + 1i

/// Conversion of a real, integer or complex endpoint into `Complex<f64>`.
pub trait ToComplex {
    fn to_complex(self) -> Complex<f64>;
}

impl ToComplex for Complex<f64> {
    fn to_complex(self) -> Complex<f64> {
        self
    }
}

impl ToComplex for Complex<f32> {
    fn to_complex(self) -> Complex<f64> {
        Complex::new(f64::from(self.re), f64::from(self.im))
    }
}

impl ToComplex for f64 {
    fn to_complex(self) -> Complex<f64> {
        Complex::new(self, 0.0)
    }
}

impl ToComplex for f32 {
    fn to_complex(self) -> Complex<f64> {
        Complex::new(f64::from(self), 0.0)
    }
}

impl ToComplex for (f64, f64) {
    fn to_complex(self) -> Complex<f64> {
        Complex::new(self.0, self.1)
    }
}

macro_rules! impl_to_complex_for_integer {
    ($($t:ty),*) => {
        $(
            impl ToComplex for $t {
                fn to_complex(self) -> Complex<f64> {
                    Complex::new(self as f64, 0.0)
                }
            }
        )*
    };
}

impl_to_complex_for_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

// ─────────────────────────────────────────────────────────────────────────────
// JSON 表示法
// ─────────────────────────────────────────────────────────────────────────────

/// 複數在 JSON 中可寫成單一實數 `2.5` 或 `[re, im]`
#[derive(Deserialize)]
#[serde(untagged)]
enum ComplexJsonProp {
    Real(f64),
    Pair(f64, f64)
}

pub fn deserialize_complex<'de, D>(deserializer: D) -> Result<Complex<f64>, D::Error>
    where D: Deserializer<'de> {
    let prop = ComplexJsonProp::deserialize(deserializer)?;
    let value = match prop {
        ComplexJsonProp::Real(re) => re.to_complex(),
        ComplexJsonProp::Pair(re, im) => (re, im).to_complex()
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "deserialize_complex")]
        z: Complex<f64>
    }

    #[test]
    fn test_real_and_integer_inputs_land_on_real_axis() {
        assert_eq!(2.5_f64.to_complex(), Complex::new(2.5, 0.0));
        assert_eq!(3_i32.to_complex(), Complex::new(3.0, 0.0));
        assert_eq!(7_usize.to_complex(), Complex::new(7.0, 0.0));
        assert_eq!((-1_i64).to_complex(), Complex::new(-1.0, 0.0));
        assert_eq!(0.5_f32.to_complex(), Complex::new(0.5, 0.0));
    }

    #[test]
    fn test_complex_inputs_pass_through() {
        let z = Complex::new(1.0, -2.0);
        assert_eq!(z.to_complex(), z);
        assert_eq!((1.0, -2.0).to_complex(), z);
        assert_eq!(Complex::new(1.0_f32, -2.0_f32).to_complex(), z);
    }

    #[test]
    fn test_deserialize_number_or_pair() {
        let real: Holder = serde_json::from_str(r#"{"z": 4}"#).unwrap();
        assert_eq!(real.z, Complex::new(4.0, 0.0));

        let pair: Holder = serde_json::from_str(r#"{"z": [0.0, 3.14]}"#).unwrap();
        assert_eq!(pair.z, Complex::new(0.0, 3.14));

        let bad: Result<Holder, _> = serde_json::from_str(r#"{"z": "i"}"#);
        assert!(bad.is_err());
    }
}
