//! Provider trait and shared error types.

use async_trait::async_trait;

/// A single non-streamed completion request.
///
/// `system` carries the fixed digest instructions, `user` the
/// formatted record listing. Nothing else crosses the boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionRequest {
    /// System-level directive describing the desired output shape.
    pub system: String,
    /// User-level input (the date line plus the record listing).
    pub user: String,
}

/// Errors raised by a completion call.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Transport-level failure (connect, TLS, timeout).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status.
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message extracted from the response body.
        message: String,
    },

    /// The configured credential could not be used.
    #[error("auth error: {message}")]
    Auth {
        /// What went wrong with the credential.
        message: String,
    },

    /// The API returned 2xx but the body was not a usable completion.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Convenience alias for provider results.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Text-completion capability.
///
/// Implementations issue exactly one request per [`complete`] call and
/// never retry — retry/degradation policy belongs to the caller.
///
/// [`complete`]: Provider::complete
#[async_trait]
pub trait Provider: Send + Sync {
    /// Model identifier sent with each request.
    fn model(&self) -> &str;

    /// Request one complete (non-streamed) text completion.
    async fn complete(&self, request: &CompletionRequest) -> ProviderResult<String>;
}
