//! Google Gemini `generateContent` adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{error, info};

use super::client::{ModelClient, http_client};
use super::prompt_builder::sanitize_user_text;
use crate::core::config::Provider;
use crate::errors::RecapError;

pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: http_client(timeout),
            api_key: api_key.into(),
            model: model.into(),
            base_url: Provider::Gemini.default_base_url().to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn request_body(system_prompt: &str, user_text: &str) -> Value {
        json!({
            "systemInstruction": {
                "parts": [{ "text": system_prompt }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": sanitize_user_text(user_text) }]
            }]
        })
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn complete(&self, system_prompt: &str, user_text: &str) -> Result<String, RecapError> {
        info!(
            provider = "gemini",
            model = %self.model,
            input_chars = user_text.chars().count(),
            "Requesting content generation"
        );

        let response = self
            .http
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url.trim_end_matches('/'),
                self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(system_prompt, user_text))
            .send()
            .await
            .map_err(|e| RecapError::HttpError(format!("Gemini request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = status.as_u16(), body = %error_text, "Gemini returned an error");
            return Err(RecapError::UpstreamError(format!(
                "status {}: {}",
                status.as_u16(),
                error_text
            )));
        }

        let reply: GenerateResponse = response.json().await.map_err(|e| {
            RecapError::UpstreamError(format!("Failed to parse Gemini response: {e}"))
        })?;

        let text = reply
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(RecapError::UpstreamError("No text in response".to_string()));
        }
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        Provider::Gemini.as_str()
    }
}
