//! The composed pipeline: store → prompt → generator → assembler.
//!
//! One pass per invocation, no shared state across runs. Boundary
//! failures (missing store, missing credential) abort before any
//! write; capability failures degrade the narrative and the artifact
//! is still produced.

use std::path::{Path, PathBuf};

use folio_core::Selection;
use folio_llm::Provider;
use folio_settings::FolioSettings;
use folio_store::{RecordStore, StoreError};
use tracing::{info, instrument};

use crate::generator::{DigestError, DigestGenerator};
use crate::report::{ReportError, ReportMode, assemble, persist};

/// Errors that abort a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Record store could not be loaded.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Generation precondition failed.
    #[error(transparent)]
    Digest(#[from] DigestError),

    /// Artifact could not be written.
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// Where the artifact was written.
    pub artifact_path: PathBuf,
    /// Records selected for the target date.
    pub selected: usize,
    /// Malformed store entries skipped during load.
    pub skipped: usize,
}

/// Output path for a run: fixed for the Markdown digest, date-named
/// for the email report so historical dates never collide.
#[must_use]
pub fn artifact_path(settings: &FolioSettings, date: &str, mode: ReportMode) -> PathBuf {
    match mode {
        ReportMode::NarrativeOnly => PathBuf::from(&settings.output.digest_path),
        ReportMode::WithAppendix => {
            Path::new(&settings.output.report_dir).join(format!("report-{date}.md"))
        }
    }
}

/// Run the full pipeline for one date.
///
/// `provider` is `None` when no credential is configured — fatal only
/// if the selection turns out non-empty. The store is loaded fresh on
/// every call; nothing is cached across runs.
#[instrument(skip_all, fields(date = %date, mode = ?mode))]
pub async fn run<P: Provider>(
    settings: &FolioSettings,
    date: &str,
    mode: ReportMode,
    provider: Option<P>,
) -> Result<PipelineOutcome, PipelineError> {
    let store = RecordStore::load(Path::new(&settings.store.path))?;
    let selection: Selection = store.select_by_date(date);
    info!(
        date,
        selected = selection.len(),
        skipped = selection.skipped,
        "selection complete"
    );

    let generator = DigestGenerator::new(provider, settings.api.key_env.clone());
    let narrative = generator.generate(&selection, mode).await?;

    let text = assemble(&selection, &narrative, mode);
    let path = artifact_path(settings, date, mode);
    persist(&path, &text)?;

    Ok(PipelineOutcome {
        artifact_path: path,
        selected: selection.len(),
        skipped: selection.skipped,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
