//! `DeepSeek` provider types, configuration, and wire format.
//!
//! Covers the OpenAI-compatible Chat Completions API. Only the fields
//! this pipeline uses are modeled — one system message, one user
//! message, `stream: false`, first choice of the response.

use serde::{Deserialize, Serialize};

/// Default base URL for the `DeepSeek` API.
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

/// Default model.
pub const DEFAULT_MODEL: &str = "deepseek-chat";

// ─────────────────────────────────────────────────────────────────────────────
// Authentication
// ─────────────────────────────────────────────────────────────────────────────

/// `DeepSeek` authentication (API key only — no OAuth).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DeepSeekAuth {
    /// Bearer API key.
    #[serde(rename = "apiKey")]
    ApiKey {
        /// The key value, resolved once at process start.
        api_key: String,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// `DeepSeek` provider configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepSeekConfig {
    /// Model ID.
    pub model: String,
    /// Authentication.
    pub auth: DeepSeekAuth,
    /// Base URL override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire format
// ─────────────────────────────────────────────────────────────────────────────

/// Chat Completions request body.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest {
    /// Model ID.
    pub model: String,
    /// Conversation messages (system directive + user content).
    pub messages: Vec<ChatMessage>,
    /// Always `false` — the pipeline wants one complete response.
    pub stream: bool,
}

/// One chat message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `"system"` or `"user"`.
    pub role: String,
    /// Message text.
    pub content: String,
}

/// Chat Completions response body (success).
#[derive(Clone, Debug, Deserialize)]
pub struct ChatResponse {
    /// Completion choices; the provider reads the first.
    pub choices: Vec<ChatChoice>,
}

/// One completion choice.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatChoice {
    /// The completion message.
    pub message: ChatMessage,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
    /// The error payload.
    pub error: ApiErrorDetail,
}

/// Error detail inside [`ApiErrorBody`].
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorDetail {
    /// Human-readable error message.
    pub message: String,
}

/// Extract the API's error message from a failure body.
///
/// Falls back to the raw body (or the bare status) when the body is
/// not the expected error envelope.
#[must_use]
pub fn parse_error_message(body: &str, status: u16) -> String {
    if let Ok(envelope) = serde_json::from_str::<ApiErrorBody>(body) {
        return envelope.error.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {status}")
    } else {
        trimmed.to_string()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
