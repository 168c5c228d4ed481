use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::services::StoreError;

/// Errors surfaced to search callers
///
/// "No matches" is never an error; every variant here maps to a non-2xx
/// response so callers can tell a failed search from an empty one.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid age range: {0}")]
    InvalidRange(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Profile store unavailable: {0}")]
    StoreUnavailable(String),
}

impl SearchError {
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::InvalidRange(_) => "invalid_range",
            SearchError::MalformedPayload(_) => "malformed_payload",
            SearchError::StoreUnavailable(_) => "store_unavailable",
        }
    }

    /// Only store failures are worth retrying; the core never retries itself
    pub fn is_retryable(&self) -> bool {
        matches!(self, SearchError::StoreUnavailable(_))
    }
}

impl From<StoreError> for SearchError {
    fn from(err: StoreError) -> Self {
        SearchError::StoreUnavailable(err.to_string())
    }
}

impl ResponseError for SearchError {
    fn status_code(&self) -> StatusCode {
        match self {
            SearchError::InvalidRange(_) | SearchError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            SearchError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            kind: self.kind().to_string(),
            status_code: self.status_code().as_u16(),
            retryable: self.is_retryable(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("JSON payload error on {}: {}", req.path(), err);
    SearchError::MalformedPayload(format!("Invalid JSON: {}", err)).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("Query payload error on {}: {}", req.path(), err);
    SearchError::MalformedPayload(format!("Invalid query: {}", err)).into()
}
