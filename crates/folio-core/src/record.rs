//! Record and selection types.
//!
//! A [`Record`] is one bibliographic item as persisted by the upstream
//! crawler. The digest pipeline is a pure reader: it never creates,
//! mutates, or deletes records. `date` is the first-seen day (not
//! last-modified) and is immutable once written.

use serde::{Deserialize, Serialize};

/// One bibliographic item observed by the upstream crawler.
///
/// `id` and `date` are required — an entry missing either cannot be
/// selected and is treated as malformed by the store loader. Everything
/// else is optional; renderers substitute documented fallbacks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Stable unique identity, assigned by the crawler on first sighting.
    pub id: String,
    /// Paper title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Publication venue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// ISO calendar date (`YYYY-MM-DD`) the item was first observed.
    pub date: String,
    /// Ordered author list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    /// Link to the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Free-text abstract from the feed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Record {
    /// Title with the documented fallback for absent values.
    #[must_use]
    pub fn title_or_unknown(&self) -> &str {
        self.title.as_deref().unwrap_or("unknown title")
    }

    /// Venue with the documented fallback for absent values.
    #[must_use]
    pub fn source_or_unknown(&self) -> &str {
        self.source.as_deref().unwrap_or("unknown")
    }
}

/// The records first observed on a target date, in store order.
///
/// An empty selection is a valid business state (a day with no new
/// papers), distinct from a missing store. `skipped` carries the count
/// of malformed store entries excluded during load so callers can
/// surface it without re-reading the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// The target date every selected record matches.
    pub date: String,
    /// Selected records, in the store's original relative order.
    pub records: Vec<Record>,
    /// Malformed store entries skipped while loading.
    pub skipped: usize,
}

impl Selection {
    /// Whether no records were first seen on the target date.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of selected records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
