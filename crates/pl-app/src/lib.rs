//! HTTP service layer for phaseline.
//!
//! Serves `GET /phase-change-diagram?pressure=<MPa>` from an immutable
//! [`PhaseDiagram`](pl_phase::PhaseDiagram) shared across requests.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::{DEFAULT_BIND, DEFAULT_PORT, ServerConfig};
pub use error::{AppError, AppResult};
pub use routes::{PHASE_CHANGE_DIAGRAM_PATH, PressureQuery, router};
pub use server::serve;
