//! # folio-llm
//!
//! Summarization provider boundary for the Folio digest pipeline.
//!
//! The pipeline needs exactly one capability from the outside world: a
//! synchronous request/response text completion. [`provider::Provider`]
//! is that seam; [`deepseek::DeepSeekProvider`] implements it against
//! the OpenAI-compatible `/chat/completions` API with `stream: false`.
//!
//! There is deliberately no streaming, no multi-turn state, and no
//! retry logic here — the caller issues one request per run and folds
//! any failure into its own degradation policy.

#![deny(unsafe_code)]

pub mod deepseek;
pub mod provider;

pub use deepseek::{DeepSeekAuth, DeepSeekConfig, DeepSeekProvider};
pub use provider::{CompletionRequest, Provider, ProviderError, ProviderResult};
