//! # API Errors
//!
//! Maps catalog errors and malformed requests (body, path or query) onto
//! HTTP responses with a JSON error body.

use super::types::ErrorResponse;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use filmorate_core::{ErrorKind, FilmorateError};

/// Error returned by every fallible handler.
#[derive(Debug)]
pub enum ApiError {
    /// The catalog rejected the operation.
    Catalog(FilmorateError),
    /// The request could not be decoded.
    BadRequest(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Catalog(e) => match e.kind() {
                ErrorKind::Validation => StatusCode::BAD_REQUEST,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
            },
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Catalog(e) => e.to_string(),
            Self::BadRequest(msg) => msg.clone(),
        }
    }
}

impl From<FilmorateError> for ApiError {
    fn from(err: FilmorateError) -> Self {
        Self::Catalog(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        tracing::warn!(status = status.as_u16(), error = %message, "Request rejected");
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
