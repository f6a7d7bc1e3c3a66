//! Top-level router combining the redirect, health and API routes.
//!
//! # Route Structure
//!
//! - `GET    /{code}`      - Short link redirect
//! - `GET    /health`      - Health check
//! - `POST   /shorten`     - Shorten a URL
//! - `GET    /urls`        - List stored URLs
//! - `DELETE /urls/{id}`   - Delete a stored URL
//!
//! Static segments take precedence over `/{code}`, so the codes `health`,
//! `shorten` and `urls` never reach the redirect handler.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// All routes with state applied and tracing attached.
///
/// Used directly by handler tests; production wraps it with
/// [`app_router`] for trailing-slash normalization.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::url_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
