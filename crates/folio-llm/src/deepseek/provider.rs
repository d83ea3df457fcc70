//! `DeepSeek` provider implementing the [`Provider`] trait.
//!
//! Uses the OpenAI-compatible `/chat/completions` endpoint with Bearer
//! auth and `stream: false`. One request per call, no retries.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, error, instrument};

use crate::provider::{CompletionRequest, Provider, ProviderError, ProviderResult};

use super::types::{
    ChatMessage, ChatRequest, ChatResponse, DEFAULT_BASE_URL, DeepSeekAuth, DeepSeekConfig,
    parse_error_message,
};

/// `DeepSeek` LLM provider.
pub struct DeepSeekProvider {
    config: DeepSeekConfig,
    client: reqwest::Client,
}

impl DeepSeekProvider {
    /// Create a new `DeepSeek` provider.
    #[must_use]
    pub fn new(config: DeepSeekConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a new `DeepSeek` provider with a shared HTTP client.
    #[must_use]
    pub fn with_client(config: DeepSeekConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// Build HTTP headers for the request.
    fn build_headers(&self) -> ProviderResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        match &self.config.auth {
            DeepSeekAuth::ApiKey { api_key } => {
                let auth_value = format!("Bearer {api_key}");
                let _ = headers.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&auth_value).map_err(|e| ProviderError::Auth {
                        message: format!("invalid API key header: {e}"),
                    })?,
                );
            }
        }

        Ok(headers)
    }

    /// Build the request body from a completion request.
    fn build_request(&self, request: &CompletionRequest) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: request.system.clone(),
                },
                ChatMessage {
                    role: "user".into(),
                    content: request.user.clone(),
                },
            ],
            stream: false,
        }
    }

    /// Perform the HTTP request and extract the completion text.
    #[instrument(skip_all, fields(model = %self.config.model))]
    async fn complete_internal(&self, request: &CompletionRequest) -> ProviderResult<String> {
        let body = self.build_request(request);
        let base_url = self.config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let url = format!("{base_url}/chat/completions");
        let headers = self.build_headers()?;

        debug!(
            model = %body.model,
            user_bytes = request.user.len(),
            "sending completion request"
        );

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(ProviderError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let message = parse_error_message(&body_text, status.as_u16());
            error!(status = status.as_u16(), message = %message, "DeepSeek API error");
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        let Some(choice) = parsed.choices.into_iter().next() else {
            return Err(ProviderError::MalformedResponse("empty choices array".into()));
        };

        debug!(
            completion_bytes = choice.message.content.len(),
            "completion received"
        );
        Ok(choice.message.content)
    }
}

#[async_trait]
impl Provider for DeepSeekProvider {
    fn model(&self) -> &str {
        &self.config.model
    }

    #[instrument(skip_all, fields(provider = "deepseek", model = %self.config.model))]
    async fn complete(&self, request: &CompletionRequest) -> ProviderResult<String> {
        self.complete_internal(request).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
