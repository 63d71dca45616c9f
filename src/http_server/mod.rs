//! # HTTP Server Module
//!
//! Axum server exposing the dashboard API.
//!
//! # Endpoints
//!
//! - `/api/health` - Health check
//! - `/api/login` - Exchange credentials for a bearer token
//! - `/api/data/*` - Dashboard data (bearer token required)

pub mod auth_routes;
pub mod config;
pub mod data_routes;
pub mod errors;
pub mod health_routes;
pub mod middleware;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
pub use state::AppState;
