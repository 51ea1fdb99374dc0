//! Static Host
//!
//! Serves the compiled Sure Circle UI with Axum. The UI is a single page
//! that routes on the URL fragment, so every path that is not a file in the
//! dist directory gets `index.html`.
//!
//! # Endpoints
//!
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Status, version and uptime
//! - `GET /*` - Files from the dist directory, `index.html` fallback

pub mod error;
pub mod health;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::ServerState;

use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router with health routes, static files and middleware
pub fn build_router(state: ServerState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(health::liveness))
        .route("/", get(health::full_health));

    let static_files =
        ServeDir::new(state.dist_dir()).fallback(ServeFile::new(state.index_file()));

    let timeout = Duration::from_secs(state.config.request_timeout_secs);
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/health", health_routes)
        .fallback_service(static_files)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the static host
pub async fn serve(config: ServerConfig) -> ServerResult<()> {
    let addr = config.addr();
    let state = ServerState::new(config);

    if !state.has_ui() {
        tracing::warn!(
            "No index.html in {:?}; build the UI with `trunk build` first",
            state.dist_dir()
        );
    }

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Sure Circle listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Sure Circle shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><title>Sure Circle</title>";

    fn create_test_app(with_ui: bool) -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        if with_ui {
            std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
            std::fs::write(dir.path().join("app.css"), "body {}").unwrap();
        }

        let config = ServerConfig {
            dist_dir: dir.path().to_path_buf(),
            ..ServerConfig::default()
        };

        (build_router(ServerState::new(config)), dir)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(true);
        let (status, _) = get(app, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app(true);
        let (status, body) = get(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        let health: health::HealthResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(health.status, "healthy");
        assert!(health.ui);
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_health_degraded_without_ui() {
        let (app, _dir) = create_test_app(false);
        let (_, body) = get(app, "/health").await;

        let health: health::HealthResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(health.status, "degraded");
    }

    #[tokio::test]
    async fn test_serves_static_file() {
        let (app, _dir) = create_test_app(true);
        let (status, body) = get(app, "/app.css").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body {}");
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let (app, _dir) = create_test_app(true);
        let (status, body) = get(app, "/pools").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }
}
