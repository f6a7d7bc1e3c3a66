//! # seqlink
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! Every stored URL gets a numeric identity from the database; its short code
//! is that identity written in base62. Codes are therefore short, dense and
//! sequential, and resolving one needs no lookup table.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Identifier codec, entities and repository traits
//! - **Application Layer** ([`application`]) - Shortening and resolution logic
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence and QR rendering
//! - **API Layer** ([`api`]) - JSON handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://url_shortener.db?mode=rwc"   # optional
//! cargo run
//!
//! curl -X POST localhost:3000/shorten -H 'content-type: application/json' \
//!      -d '{"url":"https://example.org/page"}'
//! curl -i localhost:3000/b
//! ```
//!
//! Migrations are embedded and applied at startup.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::codec::{decode, decode_id, encode, encode_id};
    pub use crate::domain::entities::UrlRecord;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
