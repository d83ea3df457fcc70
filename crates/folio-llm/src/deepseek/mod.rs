//! `DeepSeek` provider implementation.
//!
//! Split into `provider` (entry point, HTTP plumbing) and `types`
//! (config, auth, wire format).

pub mod provider;
pub mod types;

pub use provider::DeepSeekProvider;
pub use types::{DeepSeekAuth, DeepSeekConfig};
