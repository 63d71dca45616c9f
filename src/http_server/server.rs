//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::auth_routes::auth_routes;
use super::config::HttpServerConfig;
use super::data_routes::data_routes;
use super::errors::ApiError;
use super::health_routes::health_routes;
use super::state::AppState;
use crate::config::AppConfig;
use crate::store::StoreResult;

/// HTTP Server for the dashboard API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server on the default address serving sample data
    pub fn new() -> Self {
        Self::with_state(HttpServerConfig::default(), AppState::with_sample_data())
    }

    /// Create a server from the full application configuration
    pub fn from_config(config: &AppConfig) -> StoreResult<Self> {
        let state = AppState::from_config(config)?;
        Ok(Self::with_state(config.server.clone(), state))
    }

    pub fn with_state(config: HttpServerConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, Arc::new(state));
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<AppState>) -> Router {
        let api = Router::new()
            .merge(health_routes())
            .merge(auth_routes(state.clone()))
            .nest("/data", data_routes(state));

        Router::new()
            .nest("/api", api)
            .fallback(not_found)
            .layer(TraceLayer::new_for_http())
            .layer(config.cors_layer())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl+C or SIGTERM
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        info!("Server is running on {addr}");
        info!("Health check: http://{addr}/api/health");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server shut down");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
