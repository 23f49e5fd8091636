/// Recap - summarizes chat transcripts and meeting notes into a short summary
/// and per-person action items using a hosted language model.
///
/// # Architecture
///
/// - `api`: axum routes (`POST /summarize`, the page, health)
/// - `features::summarize`: validate → call the model → normalize
/// - `ai`: the `ModelClient` trait with chat-completions and Gemini adapters
/// - `normalize`: strict-JSON and heuristic-text reply parsing
///
/// # Example
///
/// ```no_run
/// use recap::core::config::AppConfig;
/// use recap::features::Summarizer;
/// use recap::core::models::SummarizationRequest;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     recap::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let summarizer = Summarizer::from_config(recap::ai::build_client(&config), &config)?;
///
///     let result = summarizer
///         .summarize(&SummarizationRequest::new("Alice: I'll send the invite."))
///         .await?;
///     println!("{}", result.to_plain_text());
///     Ok(())
/// }
/// ```
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod features;
pub mod normalize;

pub use errors::RecapError;

/// Configure structured JSON logging filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// recap::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
