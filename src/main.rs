//! CLI for the linkstash short-link registry.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (generated identifier, default validity)
//! linkstash shorten https://example.com/some/very/long/path
//!
//! # Custom identifier and validity
//! linkstash shorten https://example.com --id launch --validity 1440
//!
//! # Resolve an identifier or a full short link
//! linkstash resolve launch
//! linkstash resolve 'https://short.local/#/launch'
//!
//! # Show all stored links
//! linkstash list
//!
//! # Remove expired links
//! linkstash sweep
//! ```
//!
//! # Exit Codes
//!
//! `resolve` distinguishes its outcomes: 0 when the link is live, 2 when the
//! identifier is unknown, 3 when the link has expired.
//!
//! # Environment Variables
//!
//! See [`linkstash::config`]: `LINKS_FILE`, `BASE_URL`, `ID_LENGTH`,
//! `DEFAULT_VALIDITY_MINUTES`, `RUST_LOG`, `LOG_FORMAT`.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::DateTime;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use tracing_subscriber::EnvFilter;

use linkstash::application::services::LinkService;
use linkstash::config::{self, Config};
use linkstash::domain::entities::Resolution;
use linkstash::domain::repositories::EntryStore;
use linkstash::error::AppError;
use linkstash::infrastructure::persistence::JsonFileStore;

/// CLI for the linkstash short-link registry.
#[derive(Parser)]
#[command(name = "linkstash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Shorten {
        /// The URL to shorten (must be absolute)
        url: String,

        /// Custom identifier instead of a generated one
        #[arg(short, long)]
        id: Option<String>,

        /// Validity in minutes (non-positive falls back to the default)
        #[arg(short, long, allow_negative_numbers = true)]
        validity: Option<i64>,
    },

    /// Resolve a short identifier or short URL to its target
    Resolve {
        /// Identifier, or a full short link like 'https://short.local/#/abc123'
        target: String,
    },

    /// Show all stored links
    List,

    /// Remove expired links from the store
    Sweep {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    init_tracing(&config);

    let store = Arc::new(JsonFileStore::new(&config.links_file));
    let service = LinkService::new(
        store,
        config.base_url.clone(),
        config.id_length,
        config.default_validity_minutes,
    );

    match cli.command {
        Commands::Shorten { url, id, validity } => {
            handle_shorten(&service, &url, id.as_deref(), validity).await?;
        }
        Commands::Resolve { target } => {
            handle_resolve(&service, &target).await?;
        }
        Commands::List => {
            handle_list(&service).await?;
        }
        Commands::Sweep { yes } => {
            handle_sweep(&service, yes).await?;
        }
    }

    Ok(())
}

/// Configures the tracing subscriber from `RUST_LOG`/`LOG_FORMAT`.
///
/// Logs go to stderr so command output stays pipeable.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Creates a short link and prints it.
async fn handle_shorten<S: EntryStore>(
    service: &LinkService<S>,
    url: &str,
    custom_id: Option<&str>,
    validity: Option<i64>,
) -> Result<()> {
    match service.shorten(url, custom_id, validity).await {
        Ok(entry) => {
            println!("{}", "Short link ready:".bright_white().bold());
            println!("  {}", entry.short_url.bright_yellow().bold());
            println!();
            println!("  Target:  {}", entry.long_url.cyan());
            println!("  Expires: {}", format_expiry(entry.expires_at));
            Ok(())
        }
        Err(AppError::InvalidUrl { reason }) => {
            eprintln!(
                "{} {}",
                "Please enter a valid URL.".red(),
                format!("({reason})").dimmed()
            );
            process::exit(1);
        }
        Err(AppError::IdentifierTaken { id }) => {
            eprintln!(
                "{}",
                format!("The custom name '{id}' is already taken. Please choose another.").red()
            );
            process::exit(1);
        }
        Err(e) => Err(e).context("Failed to shorten URL. Please try again."),
    }
}

/// Resolves an identifier (or full short link) and prints the outcome.
async fn handle_resolve<S: EntryStore>(
    service: &LinkService<S>,
    target: &str,
) -> Result<()> {
    // A full short link carries the identifier after the '#/' delimiter.
    let short_id = target
        .rsplit_once("#/")
        .map(|(_, id)| id)
        .unwrap_or(target);

    match service.resolve(short_id).await? {
        Resolution::Redirect(long_url) => {
            println!("{}", long_url);
            Ok(())
        }
        Resolution::NotFound => {
            eprintln!("{}", format!("Link '{short_id}' not found.").red());
            process::exit(2);
        }
        Resolution::Expired => {
            eprintln!("{}", format!("Link '{short_id}' has expired.").yellow());
            process::exit(3);
        }
    }
}

/// Lists all stored links with their status.
async fn handle_list<S: EntryStore>(
    service: &LinkService<S>,
) -> Result<()> {
    let entries = service.list().await?;

    if entries.is_empty() {
        println!("{}", "No links stored.".dimmed());
        return Ok(());
    }

    let mut live = 0;
    for entry in &entries {
        let status = if entry.is_expired() {
            "EXPIRED".red()
        } else {
            live += 1;
            "LIVE".green()
        };

        println!(
            "{:7} {}  {} {}",
            status,
            entry.short_url.bright_yellow(),
            "->".dimmed(),
            entry.long_url
        );
    }

    println!();
    println!(
        "{}",
        format!("{} links, {} live", entries.len(), live).dimmed()
    );

    Ok(())
}

/// Removes expired links after confirmation.
async fn handle_sweep<S: EntryStore>(
    service: &LinkService<S>,
    skip_confirm: bool,
) -> Result<()> {
    let expired = service
        .list()
        .await?
        .iter()
        .filter(|e| e.is_expired())
        .count();

    if expired == 0 {
        println!("{}", "No expired links to remove.".dimmed());
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove {expired} expired links?"))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let removed = service.sweep_expired().await?;
    println!("{}", format!("Removed {removed} expired links.").green());

    Ok(())
}

/// Renders an epoch-milliseconds expiry as a readable UTC timestamp.
fn format_expiry(expires_at: i64) -> String {
    match DateTime::from_timestamp_millis(expires_at) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{expires_at} ms"),
    }
}
