//! CLI administration tool for shorturl.
//!
//! Inspects the PostgreSQL store without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Count stored short urls
//! cargo run --bin admin -- stats
//!
//! # Show where a short code points
//! cargo run --bin admin -- lookup q1W2e3R4
//!
//! # Check database connection / show server version / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db info
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use shorturl::application::services::UrlService;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::PgUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorturl.
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
    /// Show statistics
    Stats,

    /// Show the original URL behind a short code
    Lookup {
        /// Short code as returned by the API
        short_url: String,
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
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let result = match cli.command {
        Commands::Stats => handle_stats(&pool).await,
        Commands::Lookup { short_url } => handle_lookup(&pool, &short_url).await,
        Commands::Db { action } => handle_db_action(action, &pool).await,
    };

    pool.close().await;

    result
}

fn url_service(pool: &PgPool) -> UrlService {
    UrlService::new(Arc::new(PgUrlRepository::new(Arc::new(pool.clone()))))
}

/// Displays the number of stored short urls.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let count = url_service(pool)
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!("  Short urls: {}", count.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Prints the record for a short code.
async fn handle_lookup(pool: &PgPool, short_url: &str) -> Result<()> {
    match url_service(pool).resolve(short_url).await {
        Ok(record) => {
            println!("  Short url:  {}", record.short_url.cyan());
            println!("  Original:   {}", record.original_url.bright_white());
            println!(
                "  Created at: {}",
                record.created_at.to_rfc3339().bright_black()
            );
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("No short url '{}'", short_url).yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Database error: {}", e)),
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to migrate")?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
