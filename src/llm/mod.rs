// src/llm/mod.rs

pub mod anthropic_client;
pub mod classifier;
pub mod parser;
pub mod prompt;

pub use anthropic_client::AnthropicClient;

use async_trait::async_trait;

use crate::api::ApiError;

/// Seam for the hosted completion service: one prompt in, raw reply text out.
/// The production implementation is [`AnthropicClient`]; tests substitute
/// their own.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ApiError>;
}
