//! Liquid and vapor lines bundled as one immutable diagram.

use crate::error::{PhaseError, PhaseResult};
use crate::model::{CalibrationPoint, LinearModel};
use crate::phase::Phase;
use pl_core::{Pressure, Real, SpecVolume, to_mpa};
use serde::Serialize;

/// Built-in liquid calibration: (volume m³/kg, pressure MPa).
pub const LIQUID_CALIBRATION: [CalibrationPoint; 2] = [
    CalibrationPoint::new(0.00105, 0.05),
    CalibrationPoint::new(0.0035, 10.0),
];

/// Built-in vapor calibration. Listed in decreasing volume; vapor volume
/// falls as pressure rises, so the fitted slope is negative.
pub const VAPOR_CALIBRATION: [CalibrationPoint; 2] = [
    CalibrationPoint::new(30.0, 0.05),
    CalibrationPoint::new(0.0035, 10.0),
];

/// Specific volumes of both phases at one pressure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolumePair {
    pub specific_volume_liquid: SpecVolume,
    pub specific_volume_vapor: SpecVolume,
}

/// Liquid and vapor lines, derived once and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseDiagram {
    liquid: LinearModel,
    vapor: LinearModel,
}

impl PhaseDiagram {
    pub fn new(liquid: [CalibrationPoint; 2], vapor: [CalibrationPoint; 2]) -> PhaseResult<Self> {
        let diagram = Self {
            liquid: fit(Phase::Liquid, liquid)?,
            vapor: fit(Phase::Vapor, vapor)?,
        };
        for phase in Phase::ALL {
            let model = diagram.model(phase);
            tracing::debug!(
                %phase,
                slope = model.slope(),
                intercept = model.intercept(),
                "fitted phase line"
            );
        }
        Ok(diagram)
    }

    /// Diagram built from [`LIQUID_CALIBRATION`] and [`VAPOR_CALIBRATION`].
    pub fn default_calibration() -> PhaseResult<Self> {
        Self::new(LIQUID_CALIBRATION, VAPOR_CALIBRATION)
    }

    pub fn model(&self, phase: Phase) -> &LinearModel {
        match phase {
            Phase::Liquid => &self.liquid,
            Phase::Vapor => &self.vapor,
        }
    }

    /// Specific volume of one phase at `pressure` [MPa].
    pub fn volume_at(&self, phase: Phase, pressure: Real) -> PhaseResult<SpecVolume> {
        self.model(phase)
            .volume_at(pressure)
            .map_err(|e| PhaseError::model(phase, e))
    }

    /// Specific volumes of both phases at `pressure` [MPa].
    ///
    /// Either both succeed or the call fails; no partial pair is returned.
    pub fn volumes_at(&self, pressure: Real) -> PhaseResult<VolumePair> {
        Ok(VolumePair {
            specific_volume_liquid: self.volume_at(Phase::Liquid, pressure)?,
            specific_volume_vapor: self.volume_at(Phase::Vapor, pressure)?,
        })
    }

    pub fn volumes_at_pressure(&self, pressure: Pressure) -> PhaseResult<VolumePair> {
        self.volumes_at(to_mpa(pressure))
    }
}

fn fit(phase: Phase, points: [CalibrationPoint; 2]) -> PhaseResult<LinearModel> {
    let [p1, p2] = points;
    LinearModel::from_points(p1, p2).map_err(|e| PhaseError::model(phase, e))
}
