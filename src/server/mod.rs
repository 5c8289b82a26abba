//! HTTP API Service
//!
//! Exposes the generation client to the browser frontend and serves the
//! compiled frontend bundle.
//!
//! ## Endpoints
//! - `POST /api/generate` - Generate a page from event metadata
//! - `GET /api/templates` - List template styles
//! - `GET /health` - Health check
//!
//! Any other path falls through to the static bundle when one is configured.

use std::future::Future;
use std::io;
use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};
use crate::core::event::{EventData, GenerationResult};
use crate::core::llm::EventGenerator;
use crate::core::prompt::TemplateStyle;

/// Message shown to the user for every generation failure.
pub const GENERATION_FAILED_MESSAGE: &str = "生成過程中發生錯誤，請稍後再試。";

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// State
// ============================================================================

/// Shared state for the API handlers.
pub struct AppState {
    pub generator: Arc<dyn EventGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn EventGenerator>) -> Self {
        Self { generator }
    }
}

/// Template listing entry for `GET /api/templates`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub primary_color: &'static str,
}

// ============================================================================
// Router
// ============================================================================

/// Build the application router.
pub fn router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .route("/api/generate", post(generate))
        .route("/api/templates", get(list_templates))
        .route("/health", get(health_check))
        .with_state(state);

    if let Some(dir) = &config.static_dir {
        app = app.fallback_service(static_files(dir));
    }

    let app = app.layer(TraceLayer::new_for_http());

    if config.cors_permissive {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

fn static_files(dir: &Path) -> ServeDir<ServeFile> {
    if !dir.join("index.html").exists() {
        log::warn!("No index.html in static dir {}", dir.display());
    }
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(
    config: &ServerConfig,
    generator: Arc<dyn EventGenerator>,
) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let app = router(Arc::new(AppState::new(generator)), config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("MedEventGen listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown(tokio::signal::ctrl_c()))
        .await?;

    log::info!("MedEventGen server stopped");
    Ok(())
}

/// Resolve once `signal` fires. A signal that cannot be installed never
/// resolves, so the server keeps running instead of stopping immediately.
async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal.await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}

// ============================================================================
// HTTP Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn list_templates() -> impl IntoResponse {
    let templates: Vec<TemplateInfo> = TemplateStyle::all()
        .iter()
        .map(|style| TemplateInfo {
            id: style.template.as_str(),
            name: style.name,
            primary_color: style.primary_color,
        })
        .collect();
    Json(templates)
}

/// Generate a page. Any failure collapses into one generic 502; the cause is
/// only logged.
async fn generate(State(state): State<Arc<AppState>>, Json(data): Json<EventData>) -> Response {
    tracing::info!(
        generator = state.generator.id(),
        template = %data.template,
        "Generation requested"
    );

    match state.generator.generate(&data).await {
        Ok(result) => {
            tracing::info!(bytes = result.preview_html.len(), "Generation succeeded");
            (StatusCode::OK, Json::<GenerationResult>(result)).into_response()
        }
        Err(e) => {
            tracing::error!(generator = state.generator.id(), error = %e, "Generation failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": GENERATION_FAILED_MESSAGE })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_shutdown_waits_for_signal() {
        wait_for_shutdown(async { Ok(()) }).await;
    }

    #[tokio::test]
    async fn test_broken_signal_keeps_server_running() {
        let broken = async { Err(io::Error::new(io::ErrorKind::Other, "no signal handler")) };
        let outcome = tokio::time::timeout(Duration::from_millis(50), wait_for_shutdown(broken)).await;
        assert!(outcome.is_err(), "shutdown must not resolve when the signal fails");
    }
}
