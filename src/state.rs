use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::UrlService;
use crate::infrastructure::persistence::SqliteUrlRepository;
use crate::infrastructure::qr::QrGenerator;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<SqliteUrlRepository>>,
    pub qr_generator: Arc<dyn QrGenerator>,
    /// Public prefix for short links; `None` derives it from the request.
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(
        pool: Arc<SqlitePool>,
        qr_generator: Arc<dyn QrGenerator>,
        base_url: Option<String>,
    ) -> Self {
        let url_repository = Arc::new(SqliteUrlRepository::new(pool));

        Self {
            url_service: Arc::new(UrlService::new(url_repository)),
            qr_generator,
            base_url,
        }
    }
}
