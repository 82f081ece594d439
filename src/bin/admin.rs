//! CLI administration tool for book-catalog.
//!
//! Provides database maintenance and catalog inspection without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # View catalog statistics
//! cargo run --bin admin -- stats
//!
//! # List publishers with their book counts
//! cargo run --bin admin -- publishers
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite URL, defaults to `sqlite://.data/database.db`

use book_catalog::config::DEFAULT_DATABASE_URL;
use book_catalog::domain::repositories::{BookFilter, BookRepository, PublisherRepository};
use book_catalog::infrastructure::persistence::{
    self, SqliteBookRepository, SqlitePublisherRepository, database::PoolSettings,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing book-catalog.
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
    /// Show catalog statistics
    Stats,

    /// List publishers with their book counts
    Publishers,

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

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let pool = persistence::connect(&database_url, &PoolSettings::default()).await?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Publishers => list_publishers(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await?,
    }

    pool.close().await;

    Ok(())
}

/// Displays catalog statistics.
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let publishers_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM publishers")
        .fetch_one(pool)
        .await?;

    let books_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await?;

    println!(
        "  Publishers: {}",
        publishers_count.to_string().bright_green().bold()
    );
    println!(
        "  Books:      {}",
        books_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Lists publishers and how many books each one has.
///
/// # Output Format
///
/// ```text
/// 📚 Publishers
///
///   ID                                     Name                           Books
///   ───────────────────────────────────────────────────────────────────────────
///   284073e2-3494-4653-8f8e-38dfe2ce664d   Editora 1                      3
/// ```
async fn list_publishers(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📚 Publishers".bright_blue().bold());
    println!();

    let pool = Arc::new(pool.clone());
    let publishers_repo = SqlitePublisherRepository::new(pool.clone());
    let books_repo = SqliteBookRepository::new(pool);

    let publishers = publishers_repo.get_many().await?;

    if publishers.is_empty() {
        println!("{}", "  No publishers found".yellow());
        println!();
        println!(
            "  Create one with: {}",
            "curl -X POST -H 'Content-Type: application/json' -d '{\"name\":\"...\"}' http://localhost:3000/publishers"
                .bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<38} {:<30} {:<6}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Books".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for publisher in &publishers {
        let books = books_repo
            .get_many(BookFilter::by_publisher(publisher.id.as_str()))
            .await?;

        println!(
            "  {:<38} {:<30} {}",
            publisher.id.bright_black(),
            publisher.name.cyan(),
            books.len().to_string().bright_white()
        );
    }

    println!();
    println!(
        "  Total: {}",
        publishers.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool, database_url: &str) -> Result<()> {
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

            println!("  URL:    {}", database_url.bright_white());
            println!("  SQLite: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            persistence::migrate(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
