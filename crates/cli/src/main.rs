//! duosync - keep a local history of Duolingo daily progress
//!
//! Fetches the account's daily XP summaries, reconciles them into the stored
//! history and writes the result back.

#![allow(clippy::print_stdout)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use duosync_core::{SyncOptions, SyncReport, SyncService};
use duosync_domain::Config;
use duosync_infra::{
    config, init_tracing, open_store, DuolingoClient, DuolingoSummarySource, LogFormat,
};

/// duosync - Duolingo progress history
#[derive(Parser)]
#[command(name = "duosync", version)]
#[command(about = "Reconcile Duolingo daily summaries into a local history", long_about = None)]
struct Cli {
    /// Config file (JSON or TOML). Without it, environment variables are
    /// tried first, then the standard file locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output format
    #[arg(long, global = true, default_value = "text")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, reconcile and write back the history
    Sync {
        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Log in with the configured password and print the JWT
    ///
    /// Store the token as `account.jwt` (or `DUOSYNC_JWT`) to skip the
    /// password exchange on later runs.
    Login,

    /// Print the stored history as JSON, newest first
    Show {
        /// Only the N most recent days
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing .env is fine
    dotenvy::dotenv().ok();

    init_tracing(cli.log_format).context("failed to initialise logging")?;

    let config = match cli.config {
        Some(path) => config::load_from_file(Some(path)),
        None => config::load(),
    }
    .context("failed to load configuration")?;

    match cli.command {
        Commands::Sync { dry_run } => sync(&config, dry_run).await,
        Commands::Login => login(&config).await,
        Commands::Show { limit } => show(&config, limit).await,
    }
}

async fn sync(config: &Config, dry_run: bool) -> Result<()> {
    let client = DuolingoClient::from_config(&config.http)?;
    let source = Arc::new(DuolingoSummarySource::new(client, config.account.clone()));
    let store = open_store(&config.store).context("failed to open history store")?;

    let report = SyncService::new(source, store)
        .run(SyncOptions { dry_run })
        .await
        .context("sync failed")?;

    println!("{}", summarize(&report, dry_run));
    Ok(())
}

async fn login(config: &Config) -> Result<()> {
    let client = DuolingoClient::from_config(&config.http)?;
    let session = client.login(&config.account).await.context("login failed")?;

    tracing::info!(method = ?session.method, "session established");
    println!("{}", session.jwt);
    Ok(())
}

async fn show(config: &Config, limit: Option<usize>) -> Result<()> {
    let store = open_store(&config.store).context("failed to open history store")?;
    let mut history = store.load().await.context("failed to read history")?;

    if let Some(limit) = limit {
        history.truncate(limit);
    }

    println!("{}", serde_json::to_string_pretty(&history)?);
    Ok(())
}

fn summarize(report: &SyncReport, dry_run: bool) -> String {
    let outcome = match (report.written, dry_run, report.changed || report.created_today) {
        (true, _, _) => "history updated",
        (false, true, true) => "changes found (dry run, nothing written)",
        _ => "history already up to date",
    };

    let mut line = format!("{outcome}: {} days stored", report.entries.len());
    if report.created_today {
        line.push_str(", today recorded");
    }
    if !report.skipped.is_empty() {
        line.push_str(&format!(
            ", {} days skipped ({})",
            report.skipped.len(),
            report.skipped.join(", ")
        ));
    }
    line
}
