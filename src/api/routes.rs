//! API route configuration.

use crate::api::handlers::{delete_url_handler, list_urls_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// URL management routes.
///
/// # Endpoints
///
/// - `POST   /shorten`     - Shorten a URL (idempotent per normalized URL)
/// - `GET    /urls`        - List stored URLs, newest first
/// - `DELETE /urls/{id}`   - Delete a stored URL
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler))
        .route("/urls/{id}", delete(delete_url_handler))
}
