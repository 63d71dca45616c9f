//! # Auth Errors
//!
//! Error types for the authentication module.

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication and authorization errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    // ==================
    // Login Errors
    // ==================
    /// Username/password pair not in the credential list
    #[error("Invalid credentials")]
    InvalidCredentials,

    // ==================
    // Bearer Token Errors
    // ==================
    /// No `Authorization: Bearer` header
    #[error("Access token required")]
    MissingToken,

    /// Token is malformed or its signature does not verify
    #[error("Invalid token")]
    InvalidToken,

    /// Token signature is valid but it has expired
    #[error("Token expired")]
    TokenExpired,

    // ==================
    // Internal Errors
    // ==================
    /// Token generation failed
    #[error("Internal error: token generation failed")]
    TokenGenerationFailed,
}

impl AuthError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            // 401 Unauthorized
            AuthError::InvalidCredentials => 401,
            AuthError::MissingToken => 401,

            // 403 Forbidden
            AuthError::InvalidToken => 403,
            AuthError::TokenExpired => 403,

            // 500 Internal Server Error
            AuthError::TokenGenerationFailed => 500,
        }
    }

    /// Returns whether this error is the caller's fault
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
