//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and
//! `#[serde(default)]` so a partial `folio.json` is valid — missing
//! fields get their compiled default during deserialization.

use serde::{Deserialize, Serialize};

/// Root settings type for the Folio digest pipeline.
///
/// Loaded from `folio.json` with defaults applied for missing fields.
/// Environment variables (`FOLIO_*`) can override specific values.
///
/// # JSON Format
///
/// All field names are camelCase. Example:
///
/// ```json
/// {
///   "store": { "path": "state/seen.json" },
///   "api": { "model": "deepseek-chat" }
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FolioSettings {
    /// Settings schema version.
    pub version: String,
    /// Record store location.
    pub store: StoreSettings,
    /// Summarization API settings.
    pub api: ApiSettings,
    /// Artifact output locations.
    pub output: OutputSettings,
}

impl Default for FolioSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            store: StoreSettings::default(),
            api: ApiSettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl FolioSettings {
    /// Correct invalid values in place.
    ///
    /// Called automatically during loading. Out-of-range values are
    /// reset with a warning rather than rejected, so users get
    /// corrected behavior instead of a confusing error.
    pub fn validate(&mut self) {
        fn reset_if_empty(val: &mut String, name: &str, default: &str) {
            if val.trim().is_empty() {
                tracing::warn!("{name} is empty, resetting to {default:?}");
                *val = default.to_string();
            }
        }

        reset_if_empty(&mut self.store.path, "store.path", "state/seen.json");
        reset_if_empty(&mut self.api.model, "api.model", "deepseek-chat");
        reset_if_empty(
            &mut self.api.base_url,
            "api.baseUrl",
            "https://api.deepseek.com",
        );
        reset_if_empty(&mut self.api.key_env, "api.keyEnv", "DEEPSEEK_API_KEY");
        reset_if_empty(
            &mut self.output.digest_path,
            "output.digestPath",
            "output/daily.md",
        );
        reset_if_empty(&mut self.output.report_dir, "output.reportDir", "output");

        // A trailing slash would double up when joining the completions path.
        while self.api.base_url.ends_with('/') {
            let _ = self.api.base_url.pop();
        }
    }
}

/// Record store location.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreSettings {
    /// Path to the JSON record store maintained by the crawler.
    pub path: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: "state/seen.json".to_string(),
        }
    }
}

/// Summarization API settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiSettings {
    /// Model identifier sent with every completion request.
    pub model: String,
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    ///
    /// Only the *name* lives in settings; the value is resolved once
    /// at process start and injected into the provider.
    pub key_env: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            model: "deepseek-chat".to_string(),
            base_url: "https://api.deepseek.com".to_string(),
            key_env: "DEEPSEEK_API_KEY".to_string(),
        }
    }
}

/// Artifact output locations.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputSettings {
    /// Fixed path for the Markdown digest (overwritten every run).
    pub digest_path: String,
    /// Directory for date-named email reports.
    pub report_dir: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            digest_path: "output/daily.md".to_string(),
            report_dir: "output".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        let settings = FolioSettings::default();
        assert_eq!(settings.version, "0.1.0");
        assert_eq!(settings.store.path, "state/seen.json");
        assert_eq!(settings.api.model, "deepseek-chat");
        assert_eq!(settings.api.base_url, "https://api.deepseek.com");
        assert_eq!(settings.api.key_env, "DEEPSEEK_API_KEY");
        assert_eq!(settings.output.digest_path, "output/daily.md");
        assert_eq!(settings.output.report_dir, "output");
    }

    #[test]
    fn partial_json_gets_defaults() {
        let s: FolioSettings =
            serde_json::from_str(r#"{"api": {"model": "deepseek-reasoner"}}"#).unwrap();
        assert_eq!(s.api.model, "deepseek-reasoner");
        // Untouched fields keep their defaults
        assert_eq!(s.api.base_url, "https://api.deepseek.com");
        assert_eq!(s.store.path, "state/seen.json");
    }

    #[test]
    fn camel_case_wire_format() {
        let s: FolioSettings = serde_json::from_str(
            r#"{"output": {"digestPath": "out/d.md", "reportDir": "out"}}"#,
        )
        .unwrap();
        assert_eq!(s.output.digest_path, "out/d.md");
        assert_eq!(s.output.report_dir, "out");
    }

    #[test]
    fn validate_resets_empty_model() {
        let mut s = FolioSettings::default();
        s.api.model = "  ".to_string();
        s.validate();
        assert_eq!(s.api.model, "deepseek-chat");
    }

    #[test]
    fn validate_strips_trailing_slash() {
        let mut s = FolioSettings::default();
        s.api.base_url = "https://api.deepseek.com/".to_string();
        s.validate();
        assert_eq!(s.api.base_url, "https://api.deepseek.com");
    }
}
