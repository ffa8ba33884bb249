//! Transport errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use signal_core::errors::error_code::{self, SignalErrorCode};
use signal_core::errors::TimingError;

/// Errors surfaced by the HTTP handlers. All are client errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request is well-formed but violates a transport policy.
    #[error("{message}")]
    BadRequest { message: String },

    /// Request body has the wrong shape for the endpoint.
    #[error("{message}")]
    Validation { message: String },

    #[error(transparent)]
    Timing(#[from] TimingError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } | Self::Timing(_) => StatusCode::BAD_REQUEST,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl SignalErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } | Self::Validation { .. } => error_code::VALIDATION_ERROR,
            Self::Timing(e) => e.error_code(),
        }
    }
}

/// JSON error body: `{"detail": "...", "code": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    pub code: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
            code: self.error_code(),
        };
        (self.status(), Json(body)).into_response()
    }
}
