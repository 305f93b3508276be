use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Parse a decimal number, rejecting NaN and values that overflow to infinity.
///
/// Surrounding whitespace is not stripped.
pub fn parse_finite(text: &str, what: &'static str) -> Result<Real, CoreError> {
    let v: Real = text.parse().map_err(|_| CoreError::InvalidArg { what })?;
    ensure_finite(v, what)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parse_finite_reads_back_display(v in -1.0e12_f64..1.0e12_f64) {
            let parsed = parse_finite(&v.to_string(), "v").unwrap();
            prop_assert_eq!(parsed, v);
        }
    }
}
