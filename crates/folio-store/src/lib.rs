//! # folio-store
//!
//! Read-only access to the record store maintained by the upstream
//! crawler: a single JSON array of bibliographic entries, loaded
//! wholesale.
//!
//! The loader is tolerant at the entry level and strict at the file
//! level: malformed *entries* (non-objects, missing `id`/`date`) are
//! skipped, counted, and logged, while a missing or unparseable *file*
//! is a fatal precondition for the run.

#![deny(unsafe_code)]

pub mod store;

pub use store::{RecordStore, StoreError};
