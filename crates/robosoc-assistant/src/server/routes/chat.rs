//! Chat endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::{ChatRequest, ChatResponse};

/// POST / - Answer one chat message
pub async fn chat(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>> {
    let Json(body) = payload
        .map_err(|rejection| Error::internal(format!("Invalid request body: {}", rejection.body_text())))?;
    let request = ChatRequest::from_json(body)?;

    let message = request.trimmed_message().ok_or(Error::EmptyMessage)?;

    tracing::info!("Chat message: \"{}\"", message);

    let reply = state
        .llm_provider()
        .chat(state.system_prompt().as_str(), message)
        .await?;

    Ok(Json(ChatResponse::new(reply)))
}
