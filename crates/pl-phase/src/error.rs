//! Phase diagram errors.

use crate::model::ModelError;
use crate::phase::Phase;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for phase diagram operations.
pub type PhaseResult<T> = Result<T, PhaseError>;

/// Errors raised while building or querying a phase diagram.
#[derive(Error, Debug)]
pub enum PhaseError {
    /// A single phase's line failed to build or evaluate.
    #[error("{phase} model: {source}")]
    Model {
        phase: Phase,
        #[source]
        source: ModelError,
    },

    #[error("Failed to read calibration file: {path}")]
    CalibrationRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl PhaseError {
    pub fn model(phase: Phase, source: ModelError) -> Self {
        PhaseError::Model { phase, source }
    }

    /// The underlying line error, if this is one.
    pub fn model_error(&self) -> Option<(Phase, &ModelError)> {
        match self {
            PhaseError::Model { phase, source } => Some((*phase, source)),
            _ => None,
        }
    }
}
