//! The single-page front end and its demo transcript.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::Html;
use serde_json::{Value, json};
use tracing::warn;

use super::handler::INVALID_BODY_MESSAGE;
use super::helpers::ApiError;
use crate::core::models::SummarizationResult;
use crate::errors::RecapError;

const INDEX_HTML: &str = include_str!("assets/index.html");

/// Canned multi-speaker transcript behind the page's "Sample" button.
pub const SAMPLE_TRANSCRIPT: &str = "Alice: Alright team, let's sync.
Bob: Sure, what's first on the list?
Alice: I'll prepare the project timeline by tomorrow.
Cara: I'll reach out to the client for feedback today.
David: I'll draft the budget sheet and share it tonight.
Bob: Got it, I'll update the documentation.
Alice: Perfect, let's aim to review all updates in tomorrow's meeting.
Cara: I'll also set up the meeting invite.
David: Good, I'll be ready with numbers by then.
Bob: Great, let's stick to the plan!
";

/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /api/sample`
pub async fn sample() -> Json<Value> {
    Json(json!({ "text": SAMPLE_TRANSCRIPT }))
}

/// `POST /api/plain-text`: the text the page's "Copy" button puts on the
/// clipboard, rendered from a summarize response.
///
/// # Errors
///
/// 400 when the body is not a summarize response.
pub async fn plain_text(
    payload: Result<Json<SummarizationResult>, JsonRejection>,
) -> Result<String, ApiError> {
    let Json(result) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected malformed plain-text body");
        RecapError::InvalidInput(INVALID_BODY_MESSAGE.to_string())
    })?;
    Ok(result.to_plain_text())
}
