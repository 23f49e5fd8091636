//! Turns the model's raw reply into a `SummarizationResult`.
//!
//! The mode is fixed by configuration; replies are never sniffed to pick one.

pub mod cleanup;
pub mod heuristic;
pub mod strict;

use tracing::warn;

use crate::core::config::{AppConfig, OutputMode, ParseFailurePolicy};
use crate::core::models::SummarizationResult;
use crate::errors::RecapError;

pub use heuristic::HeuristicParser;
pub use strict::{PLACEHOLDER_PERSON, normalize_item, parse_strict};

pub struct Normalizer {
    mode: OutputMode,
    parse_failure: ParseFailurePolicy,
    heuristic: HeuristicParser,
}

impl Normalizer {
    /// # Errors
    ///
    /// Fails when the participant list cannot drive the heuristic parser.
    pub fn new(
        mode: OutputMode,
        parse_failure: ParseFailurePolicy,
        participants: &[String],
        catch_all: &str,
    ) -> Result<Self, RecapError> {
        Ok(Self {
            mode,
            parse_failure,
            heuristic: HeuristicParser::new(participants, catch_all)?,
        })
    }

    /// # Errors
    ///
    /// See [`Normalizer::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, RecapError> {
        Self::new(
            config.output_mode,
            config.parse_failure,
            &config.participants,
            &config.catch_all_bucket,
        )
    }

    #[must_use]
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    #[must_use]
    pub fn participants(&self) -> Vec<&str> {
        self.heuristic.participant_names()
    }

    /// # Errors
    ///
    /// Only strict-JSON mode under the hard policy fails, with
    /// `RecapError::ParseError`.
    pub fn normalize(&self, raw: &str) -> Result<SummarizationResult, RecapError> {
        match self.mode {
            OutputMode::Heuristic => Ok(self.heuristic.parse(raw)),
            OutputMode::StrictJson => match parse_strict(raw) {
                Ok(result) => Ok(result),
                Err(e) if self.parse_failure == ParseFailurePolicy::Soft => {
                    warn!(error = %e, reply_len = raw.len(), "Model reply is not valid JSON, returning it as the summary");
                    Ok(SummarizationResult::with_list(raw.trim(), Vec::new()))
                }
                Err(e) => Err(e),
            },
        }
    }
}
