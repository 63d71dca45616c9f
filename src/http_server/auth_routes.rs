//! Auth HTTP Routes
//!
//! Login against the fixed credential list.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::errors::ApiResult;
use super::state::AppState;
use crate::auth::{LoginRequest, Principal};

/// Auth routes with shared state
pub fn auth_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/login", post(login_handler))
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: Principal,
}

// ==================
// Handlers
// ==================

/// Login handler
async fn login_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(request) = body?;

    let user = state
        .credentials
        .authenticate(&request.username, &request.password)
        .inspect_err(|_| warn!(username = %request.username, "login rejected"))?;

    let issued = state.jwt.issue(&user)?;
    info!(username = %user.username, role = %user.role, "login succeeded");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token: issued.token,
        user,
    }))
}
