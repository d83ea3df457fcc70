//! Folio CLI — daily bibliographic digest generator.
//!
//! Two single-shot, no-argument variants of the same pipeline:
//!
//! - `folio digest` — Markdown digest (narrative only) at a fixed
//!   path, overwritten every run.
//! - `folio report` — email report with the full record appendix, one
//!   date-named file per run.
//!
//! Ambient inputs (the run date and the API credential) are resolved
//! here, once, and passed down explicitly; nothing below `main` reads
//! the environment.

#![deny(unsafe_code)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use folio_digest::{PipelineError, ReportMode};
use folio_llm::{DeepSeekAuth, DeepSeekConfig, DeepSeekProvider};
use folio_settings::{FolioSettings, load_settings};
use folio_store::StoreError;

/// Exit status when the record store is absent in report mode.
const EXIT_STORE_MISSING: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "folio", about = "Daily bibliographic digest generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the Markdown digest (narrative only) to the fixed daily path.
    Digest,
    /// Write the date-named report with the full record appendix.
    Report,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let settings = load_settings().context("failed to load settings")?;
    let date = run_date();
    let provider = build_provider(&settings);

    let mode = match cli.command {
        Command::Digest => ReportMode::NarrativeOnly,
        Command::Report => ReportMode::WithAppendix,
    };

    match folio_digest::run(&settings, &date, mode, provider).await {
        Ok(outcome) => {
            println!("wrote {}", outcome.artifact_path.display());
            Ok(())
        }
        Err(PipelineError::Store(StoreError::Missing { path }))
            if mode == ReportMode::WithAppendix =>
        {
            // Diagnostic goes to stdout; logs stay on stderr.
            println!("record store not found: {}", path.display());
            std::process::exit(EXIT_STORE_MISSING);
        }
        Err(e) => Err(e.into()),
    }
}

/// Install the tracing subscriber: stderr, `FOLIO_LOG` filter,
/// default `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Target date for this run: `FOLIO_DATE` override (for reproducible
/// runs), else today in the local timezone.
fn run_date() -> String {
    match std::env::var("FOLIO_DATE") {
        Ok(date) if !date.trim().is_empty() => date,
        _ => chrono::Local::now().format("%Y-%m-%d").to_string(),
    }
}

/// Resolve the credential named by settings and build the provider.
///
/// `None` when the variable is unset or blank — fatal later only if
/// the day's selection is non-empty.
fn build_provider(settings: &FolioSettings) -> Option<DeepSeekProvider> {
    let api_key = std::env::var(&settings.api.key_env)
        .ok()
        .filter(|v| !v.trim().is_empty())?;
    Some(DeepSeekProvider::new(DeepSeekConfig {
        model: settings.api.model.clone(),
        auth: DeepSeekAuth::ApiKey { api_key },
        base_url: Some(settings.api.base_url.clone()),
    }))
}
