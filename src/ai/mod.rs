//! All AI/LLM functionality

pub mod client;
pub mod gemini;
pub mod prompt_builder;

use std::sync::Arc;

use crate::core::config::{AppConfig, Provider};

// Re-export main types for convenience
pub use client::{ChatCompletionsClient, ModelClient};
pub use gemini::GeminiClient;

/// Picks the adapter for the configured provider.
#[must_use]
pub fn build_client(config: &AppConfig) -> Arc<dyn ModelClient> {
    match config.provider {
        Provider::Gemini => Arc::new(
            GeminiClient::new(&config.api_key, &config.model, config.upstream_timeout)
                .with_base_url(&config.base_url),
        ),
        provider => Arc::new(
            ChatCompletionsClient::new(&config.api_key, &config.model, config.upstream_timeout)
                .with_provider(provider)
                .with_base_url(&config.base_url),
        ),
    }
}
