//! Operator CLI for seqshort.
//!
//! Works directly against the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Get or create a short code
//! cargo run --bin admin -- shorten example.com/some/page
//!
//! # Look up a code
//! cargo run --bin admin -- resolve 1
//!
//! # View statistics
//! cargo run --bin admin -- stats --limit 20
//!
//! # Check database connection and schema
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (default: `sqlite://data/urlshort.db`)
//! - `BASE_URL` (default: `http://{LISTEN}`)

use seqshort::application::services::ShortenerService;
use seqshort::config;
use seqshort::error::AppError;
use seqshort::infrastructure::persistence::{self, MIGRATOR, SqliteUrlRepository};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;
use std::sync::Arc;

type Shortener = ShortenerService<SqliteUrlRepository>;

/// CLI tool for managing seqshort.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Get or create the short code for a URL
    Shorten {
        /// Long URL; `http://` is prepended when no scheme is given
        url: String,
    },

    /// Print the long URL behind a short code
    Resolve {
        /// Short code (case-sensitive)
        code: String,
    },

    /// Show record count and most clicked links
    Stats {
        /// Number of links to list
        #[arg(short, long, default_value_t = 10)]
        limit: i64,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and applied migrations
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = persistence::connect(
        &config.database_url,
        config.db_max_connections,
        config.connect_timeout(),
    )
    .await?;

    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone())));
    let shortener = ShortenerService::new(repository, config.base_url.clone());

    match cli.command {
        Commands::Shorten { url } => handle_shorten(&shortener, &url).await?,
        Commands::Resolve { code } => handle_resolve(&shortener, &code).await?,
        Commands::Stats { limit } => handle_stats(&shortener, limit).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_shorten(shortener: &Shortener, url: &str) -> Result<()> {
    match shortener.get_or_create_code(url).await {
        Ok(code) => {
            println!("{}", "✅ Short link ready".green().bold());
            println!("  Code:      {}", code.bright_yellow().bold());
            println!("  Short URL: {}", shortener.short_url(&code).cyan());
            Ok(())
        }
        Err(AppError::InvalidUrl { message, .. }) => {
            println!("{} {}", "❌".red(), message.red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to shorten URL: {}", e)),
    }
}

async fn handle_resolve(shortener: &Shortener, code: &str) -> Result<()> {
    match shortener.stats(code).await {
        Ok(record) => {
            println!("  {} → {}", code.bright_yellow(), record.long_url.cyan());
            println!(
                "  Clicks: {}   Created: {}",
                record.clicks.to_string().bright_green(),
                record
                    .created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black()
            );
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("⚠️  No link with code '{code}'").yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Database error: {}", e)),
    }
}

/// Displays the record count and the most clicked links.
///
/// # Output Format
///
/// ```text
/// 📊 Statistics
///
///   Links: 3
///
///   Code         Clicks  URL
///   ──────────────────────────────────────────────────────────
///   1                42  http://example.com
/// ```
async fn handle_stats(shortener: &Shortener, limit: i64) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let total = shortener
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!("  Links: {}", total.to_string().bright_green().bold());
    println!();

    let top = shortener
        .most_clicked(limit.max(0))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if top.is_empty() {
        println!("{}", "  No links yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {:>6}  {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for record in &top {
        let code = record.code.as_deref().unwrap_or("-");
        println!(
            "  {:<12} {:>6}  {}",
            code.bright_yellow(),
            record.clicks.to_string().bright_green(),
            record.long_url.cyan()
        );
    }

    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").execute(pool).await?;
            println!("{}", "✅ Database connection OK".green().bold());

            let applied: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success = 1")
                    .fetch_one(pool)
                    .await?;
            let known = MIGRATOR.iter().count();

            println!(
                "  Migrations: {}/{}",
                applied.to_string().bright_white(),
                known.to_string().bright_white()
            );
        }
    }

    Ok(())
}
