//! Narrative generation with the three-branch failure policy.
//!
//! - Empty selection → fixed sentinel, provider never touched.
//! - No credential with a non-empty selection → fatal configuration
//!   error before any network I/O.
//! - Otherwise → exactly one provider call; any capability failure is
//!   folded into a literal failure marker and the pipeline continues.

use folio_core::Selection;
use folio_llm::{CompletionRequest, Provider};
use tracing::{debug, warn};

use crate::prompt::build_prompt;
use crate::report::ReportMode;

/// Narrative used when nothing was first observed on the target date.
pub const NO_NEW_ITEMS: &str = "No new papers today.";

/// Prefix of the in-artifact marker for a failed summarization call.
pub const FAILURE_PREFIX: &str = "Summary generation failed: ";

/// Errors that abort the run before any artifact is written.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    /// A selection exists but no API credential is configured.
    ///
    /// Degrading silently here would produce a digest that looks like
    /// a real summarization attempt was made, so this aborts instead.
    #[error("no API key configured: set {key_env} to enable summarization")]
    MissingCredential {
        /// Name of the environment variable the operator must set.
        key_env: String,
    },
}

/// Produces exactly one narrative string per invocation.
///
/// The provider is injected at construction — `None` means no
/// credential was configured for this run. The generator itself never
/// reads the environment; ambient inputs are resolved at the process
/// boundary.
pub struct DigestGenerator<P> {
    provider: Option<P>,
    key_env: String,
}

impl<P: Provider> DigestGenerator<P> {
    /// Create a generator for one run.
    ///
    /// `key_env` is the name of the credential variable, used only in
    /// the [`DigestError::MissingCredential`] diagnostic.
    #[must_use]
    pub fn new(provider: Option<P>, key_env: impl Into<String>) -> Self {
        Self {
            provider,
            key_env: key_env.into(),
        }
    }

    /// Generate the narrative for a selection.
    ///
    /// Never retries and never calls the provider more than once. The
    /// returned string is used verbatim by the assembler whether it is
    /// a real summary, the empty sentinel, or a failure marker.
    pub async fn generate(
        &self,
        selection: &Selection,
        mode: ReportMode,
    ) -> Result<String, DigestError> {
        if selection.is_empty() {
            debug!("empty selection, skipping summarization");
            return Ok(NO_NEW_ITEMS.to_string());
        }

        let Some(provider) = &self.provider else {
            return Err(DigestError::MissingCredential {
                key_env: self.key_env.clone(),
            });
        };

        let prompt = build_prompt(selection, mode);
        let request = CompletionRequest {
            system: prompt.instructions,
            user: prompt.content,
        };

        match provider.complete(&request).await {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!(error = %e, "summarization failed, continuing with degraded narrative");
                Ok(format!("{FAILURE_PREFIX}{e}"))
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
