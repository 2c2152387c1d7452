//! REST client for the Gemini `generateContent` endpoint.

use std::fmt;
use std::time::Duration;

use cib_core::chat::{self, ChatPart, ChatTurn, MAX_OUTPUT_TOKENS, SYSTEM_PROMPT};
use serde::{Deserialize, Serialize};

use crate::config::AssistantConfig;
use crate::error::AssistantError;

/// HTTP client bound to one API key and model.
pub struct GeminiClient {
    client: reqwest::Client,
    api_url: String,
    model: String,
    api_key: String,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Header carrying the API key, so it never appears in a request URL.
const API_KEY_HEADER: &str = "x-goog-api-key";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: SystemInstruction<'a>,
    contents: &'a [ChatTurn],
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct SystemInstruction<'a> {
    parts: [TextPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ChatPart>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if it has any.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().map(|p| p.text).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

impl GeminiClient {
    /// Build a client from `config`.
    ///
    /// Fails with [`AssistantError::MissingApiKey`] when no key is set.
    pub fn new(config: &AssistantConfig) -> Result<Self, AssistantError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(AssistantError::MissingApiKey)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `message` with the trailing window of `history` and return the
    /// model's reply text.
    ///
    /// No retries: a transport failure, a non-2xx status or a reply
    /// without text is returned as an error.
    pub async fn generate(
        &self,
        history: &[ChatTurn],
        message: &str,
    ) -> Result<String, AssistantError> {
        let contents = chat::build_conversation(history, message);
        let body = build_request(&contents);

        tracing::debug!(
            model = %self.model,
            turns = contents.len(),
            "Sending chat request upstream",
        );

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.api_url, self.model
            ))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let parsed: GenerateResponse = Self::parse_response(response).await?;
        parsed.into_text().ok_or(AssistantError::EmptyResponse)
    }

    // ---- private helpers ----

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, AssistantError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AssistantError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, AssistantError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

fn build_request(contents: &[ChatTurn]) -> GenerateRequest<'_> {
    GenerateRequest {
        system_instruction: SystemInstruction {
            parts: [TextPart {
                text: SYSTEM_PROMPT,
            }],
        },
        contents,
        generation_config: GenerationConfig {
            max_output_tokens: MAX_OUTPUT_TOKENS,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
