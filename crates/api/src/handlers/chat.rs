//! Handler for the project assistant chat relay.

use axum::extract::State;
use axum::Json;
use cib_core::chat::{self, ChatTurn};
use cib_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Request body for `POST /api/projects/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub text: String,
}

/// POST /api/projects/chat
///
/// Stateless: the caller resends its history with every message.
pub async fn send(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let message = chat::validate_message(&input.message)?;

    let client = state.chat.as_ref().ok_or_else(|| {
        CoreError::Config("Chat assistant is not configured: GEMINI_API_KEY is missing".into())
    })?;

    let text = client.generate(&input.history, message).await?;
    tracing::debug!(history = input.history.len(), reply_chars = text.len(), "Chat reply relayed");

    Ok(Json(ChatResponse { text }))
}
