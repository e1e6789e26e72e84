//! Mapping of engine errors onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::core::{CardRecord, InvalidCardNumber, InvalidPrefix};

pub const VALIDATE_MISSING_NUMBER: &str =
    "You need to provide a number to this endpoint. Try again with number=1234567890123456.";

pub const GENERATE_MISSING_IIN: &str =
    "You need to provide an iin to this endpoint. Try again with iin=45.";

pub const INVALID_IIN: &str = "IINs should be only digits and either length one or two. Try 65!";

/// Body of every non-record error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Request failures, each answered with `400 Bad Request`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required query parameter was absent.
    #[error("{0}")]
    MissingParameter(&'static str),

    /// The number failed validation. Answered with a placeholder record
    /// rather than an error body.
    #[error(transparent)]
    InvalidCardNumber(#[from] InvalidCardNumber),

    #[error(transparent)]
    InvalidPrefix(#[from] InvalidPrefix),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::BAD_REQUEST;
        match self {
            Self::MissingParameter(message) => error_body(status, message),
            Self::InvalidCardNumber(err) => {
                let view = CardRecord::with_invalid_number(err.number).serialized(false);
                (status, Json(view)).into_response()
            }
            Self::InvalidPrefix(_) => error_body(status, INVALID_IIN),
        }
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    let body = ErrorBody {
        error: message.to_string(),
    };
    (status, Json(body)).into_response()
}
