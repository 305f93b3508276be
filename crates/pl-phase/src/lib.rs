//! pl-phase: linear phase-change model for phaseline.
//!
//! Each phase (liquid, vapor) is approximated by a straight line through two
//! calibration points in the (specific volume, pressure) plane:
//!
//! ```text
//! pressure = slope * volume + intercept
//! ```
//!
//! Lines are derived once when a [`PhaseDiagram`] is built and never mutated.
//! Queries invert the line to answer "specific volume at pressure P".
//!
//! # Example
//!
//! ```
//! use pl_phase::PhaseDiagram;
//!
//! let diagram = PhaseDiagram::default_calibration().unwrap();
//! let volumes = diagram.volumes_at(5.0).unwrap();
//! assert!(volumes.specific_volume_liquid > 0.0);
//! ```

pub mod calibration;
pub mod diagram;
pub mod error;
pub mod model;
pub mod phase;

pub use calibration::{CalibrationSet, load_calibration_yaml};
pub use diagram::{LIQUID_CALIBRATION, PhaseDiagram, VAPOR_CALIBRATION, VolumePair};
pub use error::{PhaseError, PhaseResult};
pub use model::{CalibrationPoint, LinearModel, ModelError, ModelResult};
pub use phase::Phase;
