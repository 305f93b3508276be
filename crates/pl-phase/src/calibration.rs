//! Calibration files: the four anchor points in YAML.

use crate::diagram::{LIQUID_CALIBRATION, PhaseDiagram, VAPOR_CALIBRATION};
use crate::error::{PhaseError, PhaseResult};
use crate::model::CalibrationPoint;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Two calibration points per phase.
///
/// ```yaml
/// liquid:
///   - { x: 0.00105, y: 0.05 }
///   - { x: 0.0035, y: 10.0 }
/// vapor:
///   - { x: 30.0, y: 0.05 }
///   - { x: 0.0035, y: 10.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalibrationSet {
    pub liquid: [CalibrationPoint; 2],
    pub vapor: [CalibrationPoint; 2],
}

impl Default for CalibrationSet {
    fn default() -> Self {
        Self {
            liquid: LIQUID_CALIBRATION,
            vapor: VAPOR_CALIBRATION,
        }
    }
}

impl CalibrationSet {
    pub fn from_yaml_str(content: &str) -> PhaseResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml_string(&self) -> PhaseResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Fit both lines, rejecting degenerate point pairs.
    pub fn build(&self) -> PhaseResult<PhaseDiagram> {
        PhaseDiagram::new(self.liquid, self.vapor)
    }
}

/// Read, parse, and validate a calibration file.
pub fn load_calibration_yaml(path: &Path) -> PhaseResult<PhaseDiagram> {
    let content = std::fs::read_to_string(path).map_err(|source| PhaseError::CalibrationRead {
        path: path.to_path_buf(),
        source,
    })?;
    let set = CalibrationSet::from_yaml_str(&content)?;
    tracing::info!(path = %path.display(), "loaded calibration file");
    set.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_builds_default_diagram() {
        let diagram = CalibrationSet::default().build().unwrap();
        assert_eq!(diagram, PhaseDiagram::default_calibration().unwrap());
    }

    #[test]
    fn parse_flow_style_points() {
        let yaml = "liquid:\n  - { x: 0.001, y: 1.0 }\n  - { x: 0.002, y: 2.0 }\nvapor:\n  - { x: 20.0, y: 1.0 }\n  - { x: 10.0, y: 2.0 }\n";
        let set = CalibrationSet::from_yaml_str(yaml).unwrap();
        assert_eq!(set.liquid[1], CalibrationPoint::new(0.002, 2.0));
        assert_eq!(set.vapor[0], CalibrationPoint::new(20.0, 1.0));
    }

    #[test]
    fn yaml_string_reparses() {
        let set = CalibrationSet::default();
        let text = set.to_yaml_string().unwrap();
        assert_eq!(CalibrationSet::from_yaml_str(&text).unwrap(), set);
    }

    #[test]
    fn reject_three_points() {
        let yaml = "liquid:\n  - { x: 0.001, y: 1.0 }\n  - { x: 0.002, y: 2.0 }\n  - { x: 0.003, y: 3.0 }\nvapor:\n  - { x: 20.0, y: 1.0 }\n  - { x: 10.0, y: 2.0 }\n";
        assert!(matches!(
            CalibrationSet::from_yaml_str(yaml),
            Err(PhaseError::Yaml(_))
        ));
    }

    #[test]
    fn reject_unknown_field() {
        let yaml = "liquid:\n  - { x: 0.001, y: 1.0 }\n  - { x: 0.002, y: 2.0 }\nvapor:\n  - { x: 20.0, y: 1.0 }\n  - { x: 10.0, y: 2.0 }\nsolid: []\n";
        assert!(CalibrationSet::from_yaml_str(yaml).is_err());
    }
}
