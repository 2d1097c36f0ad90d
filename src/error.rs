//! Lookup Error Types
//!
//! Every failure a request can hit is represented by [`LookupError`]. Errors are
//! propagated with `?` up to the HTTP boundary, where the [`IntoResponse`] impl
//! turns them into a status code plus a JSON `{ "error": ... }` body.
//!
//! | Variant | Status | Cause |
//! |---------|--------|-------|
//! | `MissingSearchTerm` | 400 | Keyword empty after normalization |
//! | `InvalidPayload` | 400 | Word creation payload rejected |
//! | `NotFound` | 404 | No record with the requested id |
//! | `InvalidQuery` | 500 | A built query could not be compiled |
//! | `UpstreamQueryFailure` | 500 | The document store call failed |
//!
//! Cache failures never show up here; the cache gateway swallows them.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("keyword is required")]
    MissingSearchTerm,

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("could not build query: {0}")]
    InvalidQuery(#[from] regex::Error),

    #[error("upstream query failed: {0}")]
    UpstreamQueryFailure(#[source] anyhow::Error),
}

pub type LookupResult<T> = Result<T, LookupError>;

impl LookupError {
    pub fn word_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "word",
            id: id.into(),
        }
    }

    pub fn example_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "example",
            id: id.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            LookupError::MissingSearchTerm | LookupError::InvalidPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            LookupError::NotFound { .. } => StatusCode::NOT_FOUND,
            LookupError::InvalidQuery(_) | LookupError::UpstreamQueryFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Body returned for every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {:#}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
