use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecapError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Model provider returned an error: {0}")]
    UpstreamError(String),

    #[error("Failed to parse model output: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl RecapError {
    /// HTTP status this error maps to when it reaches a caller.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            RecapError::InvalidInput(_) => 400,
            _ => 500,
        }
    }

    /// Message safe to show to the caller. Provider payloads and parse
    /// details stay in the server logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            RecapError::InvalidInput(msg) => msg.clone(),
            RecapError::ParseError(_) => "Failed to parse AI JSON output".to_string(),
            RecapError::HttpError(_) | RecapError::UpstreamError(_) | RecapError::ConfigError(_) => {
                "Failed to summarize".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for RecapError {
    fn from(error: reqwest::Error) -> Self {
        RecapError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for RecapError {
    fn from(error: serde_json::Error) -> Self {
        RecapError::ParseError(error.to_string())
    }
}
