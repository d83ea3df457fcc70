//! Artifact assembly and persistence.
//!
//! The assembler prints the narrative verbatim — real summary, empty
//! sentinel, or failure marker, it does not distinguish. Persistence
//! is a whole-file replace so re-running a date is idempotent given
//! identical inputs.

use std::path::{Path, PathBuf};

use folio_core::Selection;
use tracing::info;

/// Which artifact variant to assemble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportMode {
    /// Markdown digest: header, count, narrative. Fixed output path.
    NarrativeOnly,
    /// Email report: adds the verbatim record appendix. Date-named
    /// output path.
    WithAppendix,
}

/// Errors that can occur while persisting an artifact.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Artifact could not be written.
    #[error("failed to write artifact {path}: {source}")]
    Io {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Assemble the complete artifact text.
///
/// Deterministic: identical selection + narrative produce byte-identical
/// output. A zero count renders as `0` — it is never omitted.
#[must_use]
pub fn assemble(selection: &Selection, narrative: &str, mode: ReportMode) -> String {
    let mut text = format!(
        "# Daily Paper Digest — {}\n\n**New papers today**: {}\n\n**Digest**:\n{narrative}\n",
        selection.date,
        selection.len(),
    );

    if mode == ReportMode::WithAppendix && !selection.is_empty() {
        text.push_str("\n## Appendix — source records\n");
        for (index, record) in selection.records.iter().enumerate() {
            text.push_str(&format!("\n{}. {}\n", index + 1, record.title_or_unknown()));
            let authors = match record.authors.as_deref() {
                Some(list) if !list.is_empty() => list.join(", "),
                _ => "unknown".to_string(),
            };
            text.push_str(&format!("   - Authors: {authors}\n"));
            text.push_str(&format!("   - Source: {}\n", record.source_or_unknown()));
            text.push_str(&format!(
                "   - Link: {}\n",
                record.link.as_deref().unwrap_or("")
            ));
            if let Some(summary) = record.summary.as_deref() {
                if !summary.is_empty() {
                    text.push_str(&format!("   - Summary: {summary}\n"));
                }
            }
        }
    }

    text
}

/// Write the artifact as a whole-file replace.
///
/// Parent directories are created if missing. Never appends; a re-run
/// for the same date overwrites that date's file.
pub fn persist(path: &Path, text: &str) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| ReportError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    std::fs::write(path, text).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = text.len(), "artifact written");
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
