//! HTTP error handling.
//!
//! Errors are returned as plain text bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::QueryError;
use crate::services::ServiceError;

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest(msg) => msg,
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                msg
            }
        };
        (status, message).into_response()
    }
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidQuery(e) => e.into(),
            ServiceError::Directory(e) => AppError::Internal(e.to_string()),
        }
    }
}
