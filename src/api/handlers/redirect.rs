//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and counts the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Lookup and click increment happen in one statement, so concurrent
/// redirects never lose a count.
///
/// # Errors
///
/// Returns 404 Not Found if the code is malformed or unknown. No click is
/// recorded in that case.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.url_service.resolve(&code).await?;

    debug!(%code, url = %long_url, "Redirecting");

    Ok(Redirect::temporary(&long_url))
}
