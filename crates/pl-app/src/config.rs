//! Server configuration.

use crate::error::AppResult;
use pl_phase::{PhaseDiagram, load_calibration_yaml};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_BIND: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    /// Calibration YAML; the built-in points are used when absent.
    pub calibration: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            port: DEFAULT_PORT,
            calibration: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    /// Build the diagram once at startup. Degenerate calibration is fatal here.
    pub fn load_diagram(&self) -> AppResult<PhaseDiagram> {
        let diagram = match &self.calibration {
            Some(path) => load_calibration_yaml(path)?,
            None => PhaseDiagram::default_calibration()?,
        };
        Ok(diagram)
    }
}
