//! CLI administration tool for seqlink.
//!
//! Inspects and manages stored URLs and converts between identities and short
//! codes without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List stored URLs, newest first
//! cargo run --bin admin -- urls list
//!
//! # Show one record by short code (does not count a click)
//! cargo run --bin admin -- urls show b
//!
//! # Delete a record
//! cargo run --bin admin -- urls delete 42
//!
//! # Codec tools
//! cargo run --bin admin -- code encode 62
//! cargo run --bin admin -- code decode ba
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite database, same default as the server

use seqlink::application::services::UrlService;
use seqlink::config::{Config, load_from_env};
use seqlink::domain::codec;
use seqlink::infrastructure::persistence::{MIGRATOR, SqliteUrlRepository, connect_pool};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing seqlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage stored URLs
    Urls {
        #[command(subcommand)]
        action: UrlsAction,
    },

    /// Convert between identities and short codes
    Code {
        #[command(subcommand)]
        action: CodeAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UrlsAction {
    /// List all stored URLs
    List,

    /// Show a stored URL by short code
    Show {
        /// Short code, e.g. "b"
        code: String,
    },

    /// Delete a stored URL
    Delete {
        /// Numeric identity of the URL
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum CodeAction {
    /// Print the short code for an identity
    Encode {
        /// Non-negative identity
        id: u64,
    },

    /// Print the identity behind a short code
    Decode {
        /// Short code, e.g. "ba"
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Urls { action } => {
            let (pool, _) = open_database().await?;
            handle_urls_action(action, &pool).await?;
        }
        Commands::Code { action } => handle_code_action(action)?,
        Commands::Db { action } => {
            let (pool, config) = open_database().await?;
            handle_db_action(action, &pool, &config).await?;
        }
    }

    Ok(())
}

/// Connects with the server's configuration and applies pending migrations.
async fn open_database() -> Result<(SqlitePool, Config)> {
    let config = load_from_env()?;
    let pool = connect_pool(&config)
        .await
        .context("Failed to connect to database")?;

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok((pool, config))
}

/// Dispatches URL management commands.
async fn handle_urls_action(action: UrlsAction, pool: &SqlitePool) -> Result<()> {
    let repo = Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone())));
    let service = UrlService::new(repo);

    match action {
        UrlsAction::List => list_urls(&service).await?,
        UrlsAction::Show { code } => show_url(&service, &code).await?,
        UrlsAction::Delete { id, yes } => delete_url(&service, id, yes).await?,
    }

    Ok(())
}

/// Lists stored URLs.
///
/// # Output Format
///
/// ```text
/// 📋 Stored URLs
///
///   ID     Code         Clicks   Created            URL
///   ──────────────────────────────────────────────────────────────────────────
///   2      c            0        2024-01-16 14:20   https://example.com/
///   1      b            3        2024-01-15 10:30   https://example.org/page
/// ```
async fn list_urls(service: &UrlService<SqliteUrlRepository>) -> Result<()> {
    println!("{}", "📋 Stored URLs".bright_blue().bold());
    println!();

    let records = service.list_urls().await?;

    if records.is_empty() {
        println!("{}", "  No URLs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<12} {:<8} {:<18} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<6} {:<12} {:<8} {:<18} {}",
            record.id.to_string().bright_black(),
            record.code().cyan(),
            record.clicks.to_string().bright_green(),
            record
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            record.original_url
        );
    }

    println!();
    println!(
        "  Total: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints one record. Reading through the CLI never counts a click, and it
/// also reaches codes shadowed by static HTTP routes such as `urls`.
async fn show_url(service: &UrlService<SqliteUrlRepository>, code: &str) -> Result<()> {
    let record = service.find_by_code(code).await?;

    println!("{}", "🔗 URL".bright_blue().bold());
    println!();
    println!("  ID:      {}", record.id.to_string().bright_black());
    println!("  Code:    {}", record.code().cyan());
    println!("  URL:     {}", record.original_url);
    println!("  Clicks:  {}", record.clicks.to_string().bright_green());
    println!(
        "  Created: {}",
        record.created_at.to_rfc3339().bright_black()
    );
    println!();

    Ok(())
}

/// Deletes a record by identity with confirmation prompt.
///
/// Identities are never reused, so the deleted code stays dead.
async fn delete_url(
    service: &UrlService<SqliteUrlRepository>,
    id: i64,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑️  Delete URL".bright_blue().bold());
    println!();

    let code = codec::encode_id(id);

    println!("  ID:   {}", id.to_string().bright_black());
    println!("  Code: {}", code.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this URL?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_url(id)
        .await
        .with_context(|| format!("Failed to delete URL {}", id))?;

    println!("{}", "✅ URL deleted".green().bold());
    println!();

    Ok(())
}

fn handle_code_action(action: CodeAction) -> Result<()> {
    match action {
        CodeAction::Encode { id } => {
            println!("{}", codec::encode(id));
        }
        CodeAction::Decode { code } => {
            let id = codec::decode(&code).with_context(|| format!("Invalid code '{}'", code))?;
            println!("{}", id);

            if let Err(e) = codec::decode_id(&code) {
                eprintln!(
                    "{}",
                    format!("⚠️  Not a valid short link code: {}", e).yellow()
                );
            }
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let urls_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
                .fetch_one(pool)
                .await?;

            let clicks_count: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(clicks), 0) FROM urls")
                .fetch_one(pool)
                .await?;

            println!("  Database: {}", config.database_url.bright_white());
            println!("  SQLite:   {}", version.bright_white());
            println!(
                "  URLs:     {}",
                urls_count.to_string().bright_green().bold()
            );
            println!(
                "  Clicks:   {}",
                clicks_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
