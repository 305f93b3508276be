//! Error types for the pl-app service layer.

use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use pl_phase::{ModelError, PhaseError};

/// Request and startup failures, each mapped to one HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method {0} not allowed")]
    MethodNotAllowed(Method),

    #[error("The 'pressure' parameter is required")]
    MissingPressure,

    #[error("The 'pressure' parameter must be a number, got '{value}'")]
    InvalidPressure { value: String },

    #[error("Volume calculation failed: {0}")]
    Model(#[from] PhaseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pl-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MissingPressure | AppError::InvalidPressure { .. } => StatusCode::BAD_REQUEST,
            AppError::Model(err) => match err.model_error() {
                // A finite pressure whose volume overflows: the caller's magnitude, not the model.
                Some((_, ModelError::Overflow { .. } | ModelError::NonFinite(_))) => {
                    StatusCode::BAD_REQUEST
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(%status, "{message}");
        } else {
            tracing::debug!(%status, "{message}");
        }

        match self {
            AppError::MethodNotAllowed(_) => {
                (status, [(header::ALLOW, "GET, HEAD")], message).into_response()
            }
            _ => (status, message).into_response(),
        }
    }
}
