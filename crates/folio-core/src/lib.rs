//! # folio-core
//!
//! Foundation types for the Folio digest pipeline.
//!
//! This crate provides the shared vocabulary the other Folio crates
//! depend on:
//!
//! - [`record::Record`]: one bibliographic item observed by the crawler
//! - [`record::Selection`]: the records first seen on a target date
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other folio crates.

#![deny(unsafe_code)]

pub mod record;

pub use record::{Record, Selection};
