//! Record store loading and date selection.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use folio_core::{Record, Selection};

/// Errors that can occur while loading the record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store file does not exist.
    ///
    /// Distinct from an empty selection: the crawler has never run (or
    /// the path is wrong), so producing a "0 new papers" digest would
    /// be misleading.
    #[error("record store not found: {path}")]
    Missing {
        /// The path that was probed.
        path: PathBuf,
    },

    /// The store file exists but is not a JSON array.
    #[error("record store is not a JSON array: {0}")]
    Malformed(String),

    /// The store file could not be read.
    #[error("failed to read record store: {0}")]
    Io(#[from] std::io::Error),
}

/// The full persisted record collection, loaded into memory.
///
/// Order is the store's natural array order — not guaranteed
/// chronological. The pipeline never writes back: this type is a pure
/// reader over the crawler's state file.
#[derive(Clone, Debug)]
pub struct RecordStore {
    records: Vec<Record>,
    skipped: usize,
}

impl RecordStore {
    /// Load the store from a JSON array file.
    ///
    /// Entries that fail to parse as a [`Record`] are skipped and
    /// counted, never fatal. A missing file is [`StoreError::Missing`];
    /// a file that is not a JSON array is [`StoreError::Malformed`].
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::Missing {
                path: path.to_path_buf(),
            });
        }

        let raw = std::fs::read_to_string(path)?;
        let value: Value =
            serde_json::from_str(&raw).map_err(|e| StoreError::Malformed(e.to_string()))?;
        let Value::Array(entries) = value else {
            return Err(StoreError::Malformed("top-level value is not an array".into()));
        };

        let mut records = Vec::with_capacity(entries.len());
        let mut skipped = 0usize;
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Record>(entry) {
                Ok(record) => records.push(record),
                Err(e) => {
                    skipped += 1;
                    warn!(index, error = %e, "skipping malformed store entry");
                }
            }
        }

        debug!(
            total = records.len(),
            skipped,
            path = %path.display(),
            "record store loaded"
        );
        Ok(Self { records, skipped })
    }

    /// All well-formed records, in store order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of malformed entries skipped during load.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Select every record first observed on `date`.
    ///
    /// Exact string equality, no timezone normalization, stable
    /// original order. An empty result is a valid state, not an error.
    #[must_use]
    pub fn select_by_date(&self, date: &str) -> Selection {
        let records: Vec<Record> = self
            .records
            .iter()
            .filter(|r| r.date == date)
            .cloned()
            .collect();
        debug!(date, selected = records.len(), "date selection");
        Selection {
            date: date.to_string(),
            records,
            skipped: self.skipped,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
