//! Straight-line model through two calibration points.

use pl_core::{CoreError, Real, SpecVolume, ensure_finite};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for single-line operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors from building or evaluating a [`LinearModel`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Both points share an x-coordinate, so the slope is undefined.
    #[error("calibration points share x = {x}; slope is undefined")]
    CoincidentX { x: Real },

    /// Both points share a y-coordinate, so the line cannot be inverted.
    #[error("calibration points share y = {y}; slope is zero")]
    ZeroSlope { y: Real },

    #[error("{0}")]
    NonFinite(#[from] CoreError),

    /// Evaluation attempted on a line with zero slope.
    #[error("slope is zero, model is not invertible")]
    NonInvertible,

    /// The pressure is finite but the resulting volume is not.
    #[error("volume at pressure {pressure} is out of range")]
    Overflow { pressure: Real },
}

/// A known (specific volume, pressure) pair anchoring a line.
///
/// `x` is specific volume [m³/kg], `y` is pressure [MPa].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationPoint {
    pub x: Real,
    pub y: Real,
}

impl CalibrationPoint {
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }
}

/// `pressure = slope * volume + intercept`.
///
/// Only constructible through [`LinearModel::from_points`], so a live model
/// always has a finite, non-zero slope and a finite intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    slope: Real,
    intercept: Real,
}

impl LinearModel {
    /// Fit the line through `p1` and `p2`.
    ///
    /// Rejects non-finite coordinates, equal x-coordinates (vertical line),
    /// and equal y-coordinates (horizontal line, which cannot be inverted).
    pub fn from_points(p1: CalibrationPoint, p2: CalibrationPoint) -> ModelResult<Self> {
        ensure_finite(p1.x, "calibration x")?;
        ensure_finite(p1.y, "calibration y")?;
        ensure_finite(p2.x, "calibration x")?;
        ensure_finite(p2.y, "calibration y")?;

        if p1.x == p2.x {
            return Err(ModelError::CoincidentX { x: p1.x });
        }
        if p1.y == p2.y {
            return Err(ModelError::ZeroSlope { y: p1.y });
        }

        let slope = ensure_finite((p2.y - p1.y) / (p2.x - p1.x), "slope")?;
        let intercept = ensure_finite(p1.y - slope * p1.x, "intercept")?;

        // Extreme spreads can still underflow to zero.
        if slope == 0.0 {
            return Err(ModelError::ZeroSlope { y: p1.y });
        }

        Ok(Self { slope, intercept })
    }

    pub fn slope(&self) -> Real {
        self.slope
    }

    pub fn intercept(&self) -> Real {
        self.intercept
    }

    /// Pressure on the line at the given specific volume.
    pub fn pressure_at(&self, volume: SpecVolume) -> Real {
        self.slope * volume + self.intercept
    }

    /// Specific volume on the line at the given pressure.
    ///
    /// ```text
    /// volume = (pressure - intercept) / slope
    /// ```
    pub fn volume_at(&self, pressure: Real) -> ModelResult<SpecVolume> {
        if self.slope == 0.0 {
            return Err(ModelError::NonInvertible);
        }
        ensure_finite(pressure, "pressure")?;

        let volume = (pressure - self.intercept) / self.slope;
        if !volume.is_finite() {
            return Err(ModelError::Overflow { pressure });
        }
        Ok(volume)
    }
}
