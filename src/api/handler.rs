//! HTTP routes: the summarize endpoint plus the page and its helpers.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;
use uuid::Uuid;

use super::helpers::ApiError;
use super::ui;
use crate::core::models::{SummarizationRequest, SummarizationResult};
use crate::errors::RecapError;
use crate::features::Summarizer;

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Shared, immutable per-process state.
pub struct AppState {
    pub summarizer: Summarizer,
}

impl AppState {
    pub fn new(summarizer: Summarizer) -> Self {
        Self { summarizer }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(ui::index))
        .route("/summarize", post(summarize))
        .route("/api/summarize", post(summarize))
        .route("/api/sample", get(ui::sample))
        .route("/api/plain-text", post(ui::plain_text))
        .route("/health", get(health))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// `POST /summarize`
///
/// # Errors
///
/// 400 for a malformed body or blank text, 500 for upstream and parse failures.
#[tracing::instrument(level = "info", skip_all, fields(correlation_id = %Uuid::new_v4()))]
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SummarizationRequest>, JsonRejection>,
) -> Result<Json<SummarizationResult>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected malformed request body");
        RecapError::InvalidInput(INVALID_BODY_MESSAGE.to_string())
    })?;

    // The pipeline logs its own failures.
    let result = state.summarizer.summarize(&request).await?;
    Ok(Json(result))
}

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "provider": state.summarizer.provider_name(),
        "mode": state.summarizer.mode().as_str(),
    }))
}
