//! SQLite persistence.
//!
//! Concrete implementations of domain repository traits using SQLx, plus the
//! pool and migration setup shared by the server and the admin CLI.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - URL record storage, lookup and click counting

pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::config::Config;

/// Embedded schema migrations from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens the SQLite pool described by `config`.
///
/// The database file is created if missing. WAL mode lets `GET /urls` read
/// while redirects write; the busy timeout makes concurrent writers queue on
/// the write lock instead of failing.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the database cannot be opened.
pub async fn connect_pool(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(config.db_busy_timeout))
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_with(options)
        .await
}
