use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::models::ErrorBody;
use crate::validation::ValidationError;

// Client only sees the short message, details stay in the logs
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Too many requests")]
    RateLimited,

    // oversized or broken body, reported like any other unparseable payload
    #[error("Invalid JSON")]
    UnreadableBody(#[source] axum::Error),

    #[error("Invalid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Validation failed")]
    Validation(#[from] ValidationError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::UnreadableBody(_) | ApiError::InvalidJson(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::RateLimited => "Too many requests",
            ApiError::UnreadableBody(_) | ApiError::InvalidJson(_) => "Invalid JSON",
            ApiError::Validation(_) => "Validation failed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
