use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PARTICIPANTS: [&str; 2] = ["Alice", "Bob"];
pub const DEFAULT_CATCH_ALL_BUCKET: &str = "Everyone";

/// Hosted model provider the service talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    SambaNova,
    OpenAi,
    Gemini,
}

impl Provider {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::SambaNova => "sambanova",
            Provider::OpenAi => "openai",
            Provider::Gemini => "gemini",
        }
    }

    #[must_use]
    pub fn default_model(self) -> &'static str {
        match self {
            Provider::SambaNova => "Meta-Llama-3.1-8B-Instruct",
            Provider::OpenAi => "gpt-4o-mini",
            Provider::Gemini => "gemini-1.5-flash",
        }
    }

    #[must_use]
    pub fn default_base_url(self) -> &'static str {
        match self {
            Provider::SambaNova => "https://api.sambanova.ai/v1",
            Provider::OpenAi => "https://api.openai.com/v1",
            Provider::Gemini => "https://generativelanguage.googleapis.com/v1beta",
        }
    }

    /// Provider-specific variable consulted when `LLM_API_KEY` is unset.
    #[must_use]
    pub fn key_var(self) -> &'static str {
        match self {
            Provider::SambaNova => "SAMBANOVA_API_KEY",
            Provider::OpenAi => "OPENAI_API_KEY",
            Provider::Gemini => "GEMINI_API_KEY",
        }
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sambanova" => Ok(Provider::SambaNova),
            "openai" => Ok(Provider::OpenAi),
            "gemini" => Ok(Provider::Gemini),
            other => Err(format!("unknown model provider '{other}'")),
        }
    }
}

/// How the model reply is turned into a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    StrictJson,
    Heuristic,
}

impl OutputMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OutputMode::StrictJson => "strict-json",
            OutputMode::Heuristic => "heuristic",
        }
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict-json" | "strict" | "json" => Ok(OutputMode::StrictJson),
            "heuristic" | "text" => Ok(OutputMode::Heuristic),
            other => Err(format!("unknown output mode '{other}'")),
        }
    }
}

/// What strict-JSON mode does when the reply is not valid JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailurePolicy {
    /// Report a parse error to the caller.
    Hard,
    /// Return the raw reply as the summary with no action items.
    Soft,
}

impl FromStr for ParseFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hard" => Ok(ParseFailurePolicy::Hard),
            "soft" => Ok(ParseFailurePolicy::Soft),
            other => Err(format!("unknown parse failure policy '{other}'")),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub port: u16,
    pub provider: Provider,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub output_mode: OutputMode,
    pub parse_failure: ParseFailurePolicy,
    pub participants: Vec<String>,
    pub catch_all_bucket: String,
    pub upstream_timeout: Duration,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("port", &self.port)
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("output_mode", &self.output_mode)
            .field("parse_failure", &self.parse_failure)
            .field("participants", &self.participants)
            .field("catch_all_bucket", &self.catch_all_bucket)
            .field("upstream_timeout", &self.upstream_timeout)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = match get("MODEL_PROVIDER") {
            Some(raw) => raw.parse::<Provider>().map_err(|e| format!("MODEL_PROVIDER: {e}"))?,
            None => Provider::SambaNova,
        };

        let api_key = get("LLM_API_KEY")
            .or_else(|| get(provider.key_var()))
            .ok_or_else(|| format!("LLM_API_KEY: not set (nor {})", provider.key_var()))?;

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("PORT: {e}"))?,
            None => DEFAULT_PORT,
        };

        let output_mode = match get("OUTPUT_MODE") {
            Some(raw) => raw.parse().map_err(|e| format!("OUTPUT_MODE: {e}"))?,
            None => OutputMode::StrictJson,
        };

        let parse_failure = match get("PARSE_FAILURE") {
            Some(raw) => raw.parse().map_err(|e| format!("PARSE_FAILURE: {e}"))?,
            None => ParseFailurePolicy::Hard,
        };

        let participants = get("PARTICIPANTS")
            .map(|raw| parse_participants(&raw))
            .filter(|names| !names.is_empty())
            .unwrap_or_else(|| DEFAULT_PARTICIPANTS.iter().map(|s| (*s).to_string()).collect());

        let upstream_timeout = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| format!("UPSTREAM_TIMEOUT_SECS: {e}"))?,
            ),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            provider,
            api_key,
            model: get("MODEL_NAME").unwrap_or_else(|| provider.default_model().to_string()),
            base_url: get("LLM_BASE_URL")
                .unwrap_or_else(|| provider.default_base_url().to_string()),
            output_mode,
            parse_failure,
            participants,
            catch_all_bucket: get("CATCH_ALL_BUCKET")
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|| DEFAULT_CATCH_ALL_BUCKET.to_string()),
            upstream_timeout,
        })
    }

    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_participants(raw: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if !names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
            names.push(name.to_string());
        }
    }
    names
}
