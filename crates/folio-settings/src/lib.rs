//! # folio-settings
//!
//! Configuration management with layered sources for the Folio
//! digest pipeline.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults** — [`FolioSettings::default()`]
//! 2. **Project file** — `folio.json` in the working directory
//!    (deep-merged over defaults)
//! 3. **Environment variables** — `FOLIO_*` overrides (highest
//!    priority)
//!
//! The credential for the summarization API is deliberately NOT a
//! settings value. Settings carry only the *name* of the environment
//! variable holding it ([`ApiSettings::key_env`]); the value is read
//! once at process start and passed into the provider explicitly.
//!
//! # Usage
//!
//! ```no_run
//! use folio_settings::load_settings;
//!
//! let settings = load_settings().unwrap();
//! println!("store: {}", settings.store.path);
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::{ApiSettings, FolioSettings, OutputSettings, StoreSettings};
