//! Router, handlers, and request logging.

use crate::error::{AppError, AppResult};
use axum::{
    Json, Router,
    extract::{Query, Request, State},
    http::Method,
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use pl_core::{CoreError, Real, parse_finite};
use pl_phase::{PhaseDiagram, VolumePair};
use std::sync::Arc;
use std::time::Instant;

pub const PHASE_CHANGE_DIAGRAM_PATH: &str = "/phase-change-diagram";

/// Query string of the phase-change endpoint.
///
/// `pressure` is kept as text so missing and malformed values get distinct errors.
#[derive(Debug)]
pub struct PressureQuery {
    pub pressure: Option<String>,
}

impl PressureQuery {
    /// Keep the first `pressure` value; repeats are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let pressure = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "pressure").then_some(value));
        Self { pressure }
    }

    /// Pressure in MPa. An empty value counts as missing.
    pub fn pressure(&self) -> AppResult<Real> {
        let raw = match self.pressure.as_deref() {
            None | Some("") => return Err(AppError::MissingPressure),
            Some(raw) => raw,
        };
        parse_finite(raw, "pressure").map_err(|_: CoreError| AppError::InvalidPressure {
            value: raw.to_string(),
        })
    }
}

pub fn router(diagram: Arc<PhaseDiagram>) -> Router {
    Router::new()
        .route(
            PHASE_CHANGE_DIAGRAM_PATH,
            get(phase_change_diagram).fallback(method_not_allowed),
        )
        .with_state(diagram)
        .layer(middleware::from_fn(log_request))
}

async fn phase_change_diagram(
    State(diagram): State<Arc<PhaseDiagram>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<VolumePair>> {
    let pressure = PressureQuery::from_pairs(pairs).pressure()?;
    let volumes = diagram.volumes_at(pressure)?;
    tracing::debug!(
        pressure,
        liquid = volumes.specific_volume_liquid,
        vapor = volumes.specific_volume_vapor,
        "phase-change diagram query"
    );
    Ok(Json(volumes))
}

async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method)
}

async fn log_request(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let elapsed = start.elapsed();
    tracing::info!(
        "{} {} -> {} - {:.1}ms",
        method,
        uri.path(),
        response.status().as_u16(),
        elapsed.as_secs_f64() * 1000.0
    );

    response
}
