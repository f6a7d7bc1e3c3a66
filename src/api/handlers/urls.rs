//! Handlers for URL management endpoints (list, delete).

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::urls::{DeleteResponse, UrlDetail};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored URL, newest first.
///
/// # Endpoint
///
/// `GET /urls`
///
/// # Response
///
/// ```json
/// [
///   {
///     "id": 2,
///     "code": "c",
///     "original_url": "https://example.com/",
///     "created_at": "2024-05-01T12:00:00Z",
///     "clicks": 3
///   }
/// ]
/// ```
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlDetail>>, AppError> {
    let records = state.url_service.list_urls().await?;

    Ok(Json(records.into_iter().map(UrlDetail::from).collect()))
}

/// Deletes a stored URL by its numeric identity.
///
/// # Endpoint
///
/// `DELETE /urls/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no URL has that identity.
/// A non-numeric `id` is rejected by the path extractor with 400.
pub async fn delete_url_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.url_service.delete_url(id).await?;

    Ok(Json(DeleteResponse::deleted()))
}
