//! Chat assistant conversation shaping.
//!
//! The relay is stateless: the browser resends its recent history with every
//! message. This module owns the fixed context prompt and decides which part
//! of that history is forwarded upstream.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Number of trailing history turns forwarded with each message.
pub const HISTORY_WINDOW: usize = 10;

/// Upper bound on generated tokens per reply.
pub const MAX_OUTPUT_TOKENS: u32 = 500;

/// Longest accepted user message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4_000;

/// Context prompt sent ahead of every conversation.
pub const SYSTEM_PROMPT: &str = "\
You are the official AI assistant for the CIB Projects Management System.

CONTEXT:
- This system is used by government officials to manage internal infrastructure and service projects.
- Core fields: PID (Unique ID), Project Name, Lead Manager, Ministry, Type (NEW, ONGOING, ON_HOLD, COMPLETED), \
Status (Narrative Progress), Funding (YES/NO/FUNDED), and Contract Value.
- Key Features: Total project dashboard, filtering, searching, and exporting reports to Excel/PDF.

INSTRUCTIONS:
- Be helpful, professional, and concise.
- Use bullet points for steps or lists.
- If the user asks how to do something, explain the steps \
(e.g., \"Go to the Projects page and click the 'New Project' button\").
- Only discuss topics related to this management system or project management.";

/// Speaker of a conversation turn, using the upstream model's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPart {
    pub text: String,
}

/// One turn of a conversation: `{ "role": "user", "parts": [{ "text": ".." }] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub parts: Vec<ChatPart>,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Model, text)
    }

    fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![ChatPart { text: text.into() }],
        }
    }

    fn has_text(&self) -> bool {
        self.parts.iter().any(|p| !p.text.trim().is_empty())
    }
}

/// Check the user's message and return it trimmed.
pub fn validate_message(message: &str) -> Result<&str, CoreError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("message must not be empty".into()));
    }
    if trimmed.chars().count() > MAX_MESSAGE_CHARS {
        return Err(CoreError::Validation(format!(
            "message must be at most {MAX_MESSAGE_CHARS} characters"
        )));
    }
    Ok(trimmed)
}

/// Build the conversation sent upstream: the last [`HISTORY_WINDOW`] turns
/// of `history` followed by the new user message.
///
/// Empty turns are dropped, and so are model turns at the head of the
/// window, because the upstream API requires conversations to open with a
/// user turn.
pub fn build_conversation(history: &[ChatTurn], message: &str) -> Vec<ChatTurn> {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    let mut turns: Vec<ChatTurn> = history[start..]
        .iter()
        .filter(|t| t.has_text())
        .skip_while(|t| t.role == ChatRole::Model)
        .cloned()
        .collect();
    turns.push(ChatTurn::user(message));
    turns
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
