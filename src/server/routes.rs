//! HTTP routes.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | /api/health | [`health_check`] |
//! | GET | /api/validate?number= | [`validate`] |
//! | GET | /api/generate?iin= | [`generate`] |

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::config::ServerConfig;
use super::error::{ApiError, GENERATE_MISSING_IIN, VALIDATE_MISSING_NUMBER};
use crate::core::{NumberGenerator, RecordView, from_number};

/// Shared, read-only handler state.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub card_length: usize,
}

impl From<&ServerConfig> for AppState {
    fn from(config: &ServerConfig) -> Self {
        Self {
            card_length: config.card_length,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Raw query pairs in request order. Repeated keys are kept.
pub type QueryPairs = Vec<(String, String)>;

/// Last value given for `key`; a repeated parameter takes its final value.
fn last_param(pairs: QueryPairs, key: &str) -> Option<String> {
    pairs.into_iter().rev().find(|(k, _)| k == key).map(|(_, v)| v)
}

/// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// GET /api/validate
///
/// Answers `200` with the decomposed number (without the number itself),
/// or `400` with an `is_valid: false` placeholder record.
pub async fn validate(Query(pairs): Query<QueryPairs>) -> Result<Json<RecordView>, ApiError> {
    info!("received request to validate a card number");
    let Some(number) = last_param(pairs, "number") else {
        warn!("validate request without number parameter");
        return Err(ApiError::MissingParameter(VALIDATE_MISSING_NUMBER));
    };

    let record = from_number(&number).inspect_err(|err| {
        warn!(number = %err.number, "rejected input that is not a card number");
    })?;

    let view = record.serialized(false);
    debug!(?view, "validated card number");
    Ok(Json(view))
}

/// GET /api/generate
///
/// Answers `200` with a freshly generated number (full number included), or
/// `400` with an error message.
pub async fn generate(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<RecordView>, ApiError> {
    info!("received request to generate a card number");
    let Some(iin) = last_param(pairs, "iin") else {
        warn!("generate request without iin parameter");
        return Err(ApiError::MissingParameter(GENERATE_MISSING_IIN));
    };

    info!(%iin, "generating card number");
    let record = NumberGenerator::new()
        .length(state.card_length)
        .generate(&iin)
        .inspect_err(|err| warn!(prefix = %err.prefix, "rejected issuer prefix"))?;

    let view = record.serialized(true);
    debug!(?view, "generated card number");
    Ok(Json(view))
}

/// Build the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/validate", get(validate))
        .route("/api/generate", get(generate))
        .with_state(state)
}
