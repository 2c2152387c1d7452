//! Upstream client for the project assistant chat relay.
//!
//! Forwards a shaped conversation (see [`cib_core::chat`]) to the Gemini
//! `generateContent` REST endpoint and returns the generated text.

pub mod config;
pub mod error;
pub mod gemini;

pub use config::AssistantConfig;
pub use error::AssistantError;
pub use gemini::GeminiClient;
