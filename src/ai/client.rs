//! Model client abstraction and the OpenAI-compatible chat-completions adapter.
//!
//! SambaNova and OpenAI both speak `/chat/completions`, so one adapter serves
//! both; only the base URL and model differ.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{error, info};

use super::prompt_builder::{build_messages, message_text, role_str};
use crate::core::config::Provider;
use crate::errors::RecapError;

/// Produces raw reply text from a system prompt and the user's text.
///
/// One call is one outbound request: no retries, no backoff.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_text: &str) -> Result<String, RecapError>;

    fn provider_name(&self) -> &'static str;
}

pub(crate) fn http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}

pub struct ChatCompletionsClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
    provider: Provider,
}

impl ChatCompletionsClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: http_client(timeout),
            api_key: api_key.into(),
            model: model.into(),
            base_url: Provider::SambaNova.default_base_url().to_string(),
            provider: Provider::SambaNova,
        }
    }

    #[must_use]
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self.base_url = provider.default_base_url().to_string();
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn request_body(&self, system_prompt: &str, user_text: &str) -> Value {
        let messages: Vec<Value> = build_messages(system_prompt, user_text)
            .iter()
            .map(|msg| {
                json!({
                    "role": role_str(&msg.role),
                    "content": message_text(msg),
                })
            })
            .collect();

        json!({
            "model": self.model,
            "messages": messages,
            "temperature": 0.2
        })
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[async_trait]
impl ModelClient for ChatCompletionsClient {
    async fn complete(&self, system_prompt: &str, user_text: &str) -> Result<String, RecapError> {
        #[cfg(feature = "debug-logs")]
        info!("Using system prompt:\n{}", system_prompt);

        info!(
            provider = self.provider.as_str(),
            model = %self.model,
            input_chars = user_text.chars().count(),
            "Requesting chat completion"
        );

        let response = self
            .http
            .post(format!(
                "{}/chat/completions",
                self.base_url.trim_end_matches('/')
            ))
            .bearer_auth(&self.api_key)
            .json(&self.request_body(system_prompt, user_text))
            .send()
            .await
            .map_err(|e| RecapError::HttpError(format!("chat completion request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = status.as_u16(), body = %error_text, "Model provider returned an error");
            return Err(RecapError::UpstreamError(format!(
                "status {}: {}",
                status.as_u16(),
                error_text
            )));
        }

        let reply: CompletionResponse = response.json().await.map_err(|e| {
            RecapError::UpstreamError(format!("Failed to parse completion response: {e}"))
        })?;

        reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| RecapError::UpstreamError("No text in response".to_string()))
    }

    fn provider_name(&self) -> &'static str {
        self.provider.as_str()
    }
}
