//! # Auth Module
//!
//! Login against a fixed credential list and bearer-token (JWT)
//! validation for the data endpoints.

pub mod credentials;
pub mod errors;
pub mod jwt;

pub use credentials::{CredentialStore, LoginRequest, Principal};
pub use errors::{AuthError, AuthResult};
pub use jwt::{Claims, IssuedToken, JwtConfig, JwtManager};
