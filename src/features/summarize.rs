use std::sync::Arc;
use tracing::{debug, error, info};

use crate::ai::ModelClient;
use crate::ai::prompt_builder::system_prompt;
use crate::core::config::{AppConfig, OutputMode};
use crate::core::models::{SummarizationRequest, SummarizationResult};
use crate::errors::RecapError;
use crate::normalize::Normalizer;

pub const NO_TEXT_MESSAGE: &str = "No text provided";

/// validate → call the model → normalize. Holds no per-request state, so one
/// instance is shared by every request.
pub struct Summarizer {
    client: Arc<dyn ModelClient>,
    normalizer: Normalizer,
    system_prompt: String,
}

impl Summarizer {
    pub fn new(client: Arc<dyn ModelClient>, normalizer: Normalizer) -> Self {
        let system_prompt = system_prompt(normalizer.mode(), &normalizer.participants());
        Self {
            client,
            normalizer,
            system_prompt,
        }
    }

    /// # Errors
    ///
    /// See [`Normalizer::from_config`].
    pub fn from_config(client: Arc<dyn ModelClient>, config: &AppConfig) -> Result<Self, RecapError> {
        Ok(Self::new(client, Normalizer::from_config(config)?))
    }

    #[must_use]
    pub fn mode(&self) -> OutputMode {
        self.normalizer.mode()
    }

    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.client.provider_name()
    }

    /// Runs one request through the pipeline. Blank text is rejected before
    /// the model is called.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for blank text, otherwise whatever the model client or
    /// normalizer reports.
    pub async fn summarize(
        &self,
        request: &SummarizationRequest,
    ) -> Result<SummarizationResult, RecapError> {
        if request.is_blank() {
            info!("Rejected request with no text");
            return Err(RecapError::InvalidInput(NO_TEXT_MESSAGE.to_string()));
        }

        debug!(input_chars = request.text.chars().count(), "Awaiting model reply");
        let reply = self
            .client
            .complete(&self.system_prompt, &request.text)
            .await
            .inspect_err(|e| error!(error = %e, provider = self.client.provider_name(), "Model call failed"))?;

        debug!(reply_len = reply.len(), mode = self.mode().as_str(), "Normalizing model reply");
        let result = self
            .normalizer
            .normalize(&reply)
            .inspect_err(|e| error!(error = %e, reply = %reply, "Failed to normalize model reply"))?;

        info!(
            summary_chars = result.summary.chars().count(),
            action_items = result.item_count(),
            "Summarization complete"
        );
        Ok(result)
    }
}
