#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, future_incompatible)]

//! Content and contact API for a freelance automation consultant's site.
//!
//! Serves an immutable content catalog (profile, services, projects,
//! testimonials) over read-only endpoints and accepts validated
//! contact-form submissions. The catalog is loaded once at startup and
//! never mutated; contact messages are the only write path.

use std::sync::Arc;

// Explicitly acknowledge dependencies used only by the binary target
use anyhow as _;
use tokio as _;
use tracing_subscriber as _;
use utoipa_swagger_ui as _;

// Dev dependencies used in tests (acknowledged to prevent clippy warnings)
#[cfg(test)]
use futures as _;
#[cfg(test)]
use reqwest as _;

use axum::{
    http,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod content;
pub mod documentation;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod repository;
pub mod validation;

pub use content::ContentStore;
pub use documentation::ApiDoc;
pub use errors::AppError;

use repository::{InMemoryMessageRepository, MessageRepository};

/// Shared application state: the immutable content store and the
/// message repository. Both are cheap to clone behind `Arc` and safe
/// for unlimited concurrent readers.
pub struct AppState {
    pub content: Arc<ContentStore>,
    pub messages: Arc<dyn MessageRepository>,
}

impl AppState {
    pub fn new(content: Arc<ContentStore>, messages: Arc<dyn MessageRepository>) -> Self {
        Self { content, messages }
    }
}

/// Load the default content set and wire the in-memory message
/// repository. The content files are read exactly once here; a load
/// failure aborts startup rather than surfacing per-request.
pub fn bootstrap() -> Result<Arc<AppState>, AppError> {
    let content = ContentStore::load_default()?;
    let messages: Arc<dyn MessageRepository> = Arc::new(InMemoryMessageRepository::new());
    Ok(Arc::new(AppState::new(content, messages)))
}

/// Same as [`bootstrap`] with an explicit content directory.
pub fn bootstrap_from(content_dir: &std::path::Path) -> Result<Arc<AppState>, AppError> {
    let content = ContentStore::load(content_dir)?;
    let messages: Arc<dyn MessageRepository> = Arc::new(InMemoryMessageRepository::new());
    Ok(Arc::new(AppState::new(content, messages)))
}

pub fn app(state: Arc<AppState>) -> Router {
    let cors = match std::env::var("ALLOWED_ORIGINS") {
        Ok(origins) if !origins.trim().is_empty() => {
            let mut layer = CorsLayer::new();
            for o in origins.split(',') {
                if let Ok(origin) = o.trim().parse::<http::HeaderValue>() {
                    layer = layer.allow_origin(origin);
                }
            }
            layer
        }
        _ => {
            // No origins unless explicitly configured
            CorsLayer::new()
        }
    };

    Router::new()
        .route("/api/profile", get(handlers::get_profile))
        .route("/api/services", get(handlers::list_services))
        .route("/api/projects", get(handlers::list_projects))
        .route("/api/testimonials", get(handlers::list_testimonials))
        .route("/api/contact", post(handlers::submit_contact))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::get_metrics))
        .layer(axum::middleware::from_fn(metrics::http_metrics_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
