//! # API Errors
//!
//! Maps every failure onto one of three client-visible classes:
//!
//! - validation (400) with the message shown to the caller
//! - authentication (401/403) passed through unchanged
//! - unexpected (500) with a generic body; the detail is only logged

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::auth::AuthError;
use crate::store::StoreError;
use crate::table::QueryError;

/// Body returned for unexpected failures
pub const UNEXPECTED_MESSAGE: &str = "Something went wrong!";

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad filter/sort/pagination parameters
    #[error(transparent)]
    Validation(#[from] QueryError),

    /// Request body could not be parsed
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Query string could not be decoded
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    /// Missing or invalid credentials
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Route not found")]
    NotFound,

    /// Anything else; the detail never reaches the client
    #[error("Something went wrong!")]
    Unexpected(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::UNAUTHORIZED)
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            UNEXPECTED_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Unexpected(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.public_message(),
            code: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            match &self {
                ApiError::Unexpected(detail) => error!(%detail, "request failed"),
                other => error!(error = %other, "request failed"),
            }
        }
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(QueryError::InvalidPage("0".to_string())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Unexpected("disk on fire".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_auth_error_propagation() {
        assert_eq!(
            ApiError::from(AuthError::MissingToken).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(AuthError::InvalidToken).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::from(AuthError::InvalidToken).public_message(),
            "Invalid token"
        );
    }

    #[test]
    fn test_unexpected_detail_not_leaked() {
        let err = ApiError::Unexpected("/var/data/listings.json: permission denied".to_string());
        let body = ErrorResponse::from(&err);
        assert_eq!(body.error, UNEXPECTED_MESSAGE);
        assert_eq!(body.code, 500);

        let err = ApiError::from(AuthError::TokenGenerationFailed);
        assert_eq!(err.public_message(), UNEXPECTED_MESSAGE);
    }

    #[test]
    fn test_validation_message_shown() {
        let err = ApiError::from(QueryError::UnknownField("colour".to_string()));
        assert_eq!(err.public_message(), "Unknown field: colour");
    }
}
