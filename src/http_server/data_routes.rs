//! Data HTTP Routes
//!
//! Everything under `/api/data`. Every route requires a bearer token.
//!
//! - `GET /table` - filtered, sorted, paginated listings
//! - `GET /market-data` - MSA rankings (`filter`, `date`)
//! - `GET /acquisition-data` - headline metrics and all listings
//! - `GET /companies` - builder brands
//! - `GET /map` - pins (`type`, `status`) and polygons
//! - `GET /chatbot` - assistant greetings

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Query, State},
    middleware,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::ApiResult;
use super::middleware::require_bearer;
use super::state::AppState;
use crate::auth::Claims;
use crate::dashboard::{self, AcquisitionData, ChatMessage, Company, MapData, MarketData};
use crate::table::{ResultPage, TableQueryParams};

/// Data routes with shared state, guarded by the bearer middleware
pub fn data_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/table", get(table_handler))
        .route("/market-data", get(market_data_handler))
        .route("/acquisition-data", get(acquisition_data_handler))
        .route("/companies", get(companies_handler))
        .route("/map", get(map_handler))
        .route("/chatbot", get(chatbot_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer))
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Default, Deserialize)]
pub struct MarketDataQuery {
    pub filter: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MapQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompaniesResponse {
    pub companies: Vec<Company>,
}

#[derive(Debug, Serialize)]
pub struct ChatbotResponse {
    pub messages: Vec<ChatMessage>,
}

// ==================
// Handlers
// ==================

/// Table pipeline handler
async fn table_handler(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    params: Result<Query<TableQueryParams>, QueryRejection>,
) -> ApiResult<Json<ResultPage>> {
    let Query(params) = params?;
    let query = params.into_query(state.limits())?;
    let records = state.store.records()?;
    let page = state.processor.process(&records, &query)?;

    debug!(
        user = %claims.sub,
        page = page.page,
        limit = page.limit,
        total = page.total,
        "table query served"
    );

    Ok(Json(page))
}

async fn market_data_handler(
    params: Result<Query<MarketDataQuery>, QueryRejection>,
) -> ApiResult<Json<MarketData>> {
    let Query(params) = params?;
    Ok(Json(dashboard::market_data(
        params.filter.as_deref(),
        params.date.as_deref(),
    )))
}

async fn acquisition_data_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<AcquisitionData>> {
    let records = state.store.records()?;
    Ok(Json(dashboard::acquisition_data(&records)))
}

async fn companies_handler() -> Json<CompaniesResponse> {
    Json(CompaniesResponse {
        companies: dashboard::companies(),
    })
}

async fn map_handler(
    params: Result<Query<MapQuery>, QueryRejection>,
) -> ApiResult<Json<MapData>> {
    let Query(params) = params?;
    Ok(Json(dashboard::map_data(
        params.kind.as_deref().filter(|k| !k.is_empty()),
        params.status.as_deref().filter(|s| !s.is_empty()),
    )))
}

async fn chatbot_handler() -> Json<ChatbotResponse> {
    Json(ChatbotResponse {
        messages: dashboard::chatbot_messages(Utc::now()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Principal;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn token(state: &AppState) -> String {
        state
            .jwt
            .issue(&Principal {
                username: "demo".to_string(),
                role: "viewer".to_string(),
            })
            .unwrap()
            .token
    }

    async fn get_json(router: Router, uri: &str, bearer: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().uri(uri);
        if let Some(t) = bearer {
            builder = builder.header("authorization", format!("Bearer {t}"));
        }
        let resp = router
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_missing_token_is_401() {
        let state = Arc::new(AppState::with_sample_data());
        let (status, body) = get_json(data_routes(state), "/table", None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Access token required");
    }

    #[tokio::test]
    async fn test_invalid_token_is_403() {
        let state = Arc::new(AppState::with_sample_data());
        let (status, body) = get_json(data_routes(state), "/companies", Some("not.a.jwt")).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Invalid token");
    }

    #[tokio::test]
    async fn test_table_filter() {
        let state = Arc::new(AppState::with_sample_data());
        let t = token(&state);
        let (status, body) = get_json(
            data_routes(state),
            "/table?filterBy=builder&filterValue=blue",
            Some(&t),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["totalPages"], 1);
        assert_eq!(body["data"][0]["id"], 1);
        assert_eq!(body["data"][1]["id"], 6);
    }

    #[tokio::test]
    async fn test_table_validation_error() {
        let state = Arc::new(AppState::with_sample_data());
        let t = token(&state);
        let (status, body) = get_json(data_routes(state), "/table?page=0", Some(&t)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn test_malformed_query_string_uses_error_body() {
        let state = Arc::new(AppState::with_sample_data());
        let t = token(&state);
        let (status, body) =
            get_json(data_routes(state), "/table?page=1&page=2", Some(&t)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid query string"));
    }

    #[tokio::test]
    async fn test_map_filters() {
        let state = Arc::new(AppState::with_sample_data());
        let t = token(&state);
        let (status, body) =
            get_json(data_routes(state), "/map?type=mixed&status=", Some(&t)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pins"].as_array().unwrap().len(), 2);
        assert_eq!(body["polygons"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_chatbot_and_companies() {
        let state = Arc::new(AppState::with_sample_data());
        let t = token(&state);

        let (_, chat) = get_json(data_routes(state.clone()), "/chatbot", Some(&t)).await;
        assert_eq!(chat["messages"].as_array().unwrap().len(), 3);

        let (_, companies) = get_json(data_routes(state), "/companies", Some(&t)).await;
        assert_eq!(companies["companies"][0]["name"], "kb HOME");
    }
}
