//! Bearer token middleware
//!
//! Guards the data routes. A missing token yields 401, an invalid or
//! expired one 403. Validated [`Claims`] are placed in the request
//! extensions for handlers that need the caller's identity.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header::AUTHORIZATION, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use super::errors::ApiResult;
use super::state::AppState;
use crate::auth::{AuthError, Claims};

/// Extract the token from `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Reject requests without a valid bearer token
pub async fn require_bearer(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let claims: Claims = {
        let token = bearer_token(request.headers()).ok_or(AuthError::MissingToken)?;
        state.jwt.validate(token)?
    };

    debug!(user = %claims.sub, role = %claims.role, "bearer token accepted");
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
