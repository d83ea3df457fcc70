//! Settings loading: file merge and environment overrides.
//!
//! `folio.json` is deep-merged over compiled defaults, then `FOLIO_*`
//! environment variables are applied on top. A missing file is not an
//! error — the tool runs fine on defaults.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::Result;
use crate::types::FolioSettings;

/// Default settings file location: `folio.json` in the working
/// directory (the tool is run from the repository it maintains).
#[must_use]
pub fn settings_path() -> PathBuf {
    PathBuf::from("folio.json")
}

/// Load settings from the default path with env overrides applied.
pub fn load_settings() -> Result<FolioSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific file path.
///
/// Missing file → defaults. Present file → deep-merged over defaults.
/// `FOLIO_*` environment variables are applied last, then the result
/// is validated (invalid values are corrected with a warning).
pub fn load_settings_from_path(path: &Path) -> Result<FolioSettings> {
    let defaults = serde_json::to_value(FolioSettings::default())?;

    let merged = if path.exists() {
        let raw = std::fs::read_to_string(path)?;
        let file: Value = serde_json::from_str(&raw)?;
        deep_merge(defaults, file)
    } else {
        tracing::debug!(?path, "no settings file, using defaults");
        defaults
    };

    let mut settings: FolioSettings = serde_json::from_value(merged)?;
    apply_env_overrides(&mut settings);
    settings.validate();
    Ok(settings)
}

/// Deep-merge `overlay` onto `base`.
///
/// Objects merge recursively; any other value in `overlay` replaces
/// the corresponding `base` value wholesale.
#[must_use]
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_val) => deep_merge(base_val, overlay_val),
                    None => overlay_val,
                };
                let _ = base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Apply `FOLIO_*` environment variable overrides.
///
/// Empty values are ignored — an empty export is treated the same as
/// an unset variable.
fn apply_env_overrides(settings: &mut FolioSettings) {
    fn override_from(name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(name) {
            if !val.trim().is_empty() {
                tracing::debug!(var = name, "applying env override");
                *target = val;
            }
        }
    }

    override_from("FOLIO_STORE_PATH", &mut settings.store.path);
    override_from("FOLIO_MODEL", &mut settings.api.model);
    override_from("FOLIO_BASE_URL", &mut settings.api.base_url);
    override_from("FOLIO_KEY_ENV", &mut settings.api.key_env);
    override_from("FOLIO_DIGEST_PATH", &mut settings.output.digest_path);
    override_from("FOLIO_REPORT_DIR", &mut settings.output.report_dir);
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
