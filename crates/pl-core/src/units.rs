// pl-core/src/units.rs

use uom::si::f64::Pressure as UomPressure;

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;

/// Specific volume [m³/kg].
///
/// Carried as a bare Real alongside uom quantities; responses serialize it directly.
pub type SpecVolume = f64;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn mpa(v: f64) -> Pressure {
    use uom::si::pressure::megapascal;
    Pressure::new::<megapascal>(v)
}

/// Pressure expressed in megapascal, the unit the phase calibration uses.
#[inline]
pub fn to_mpa(p: Pressure) -> f64 {
    use uom::si::pressure::megapascal;
    p.get::<megapascal>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tolerances, nearly_equal};

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _q = mpa(0.1);
    }

    #[test]
    fn megapascal_roundtrip() {
        let tol = Tolerances::default();
        assert!(nearly_equal(to_mpa(pa(5.0e6)), 5.0, tol));
        assert!(nearly_equal(to_mpa(mpa(0.05)), 0.05, tol));
    }
}
