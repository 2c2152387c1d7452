use cib_core::error::CoreError;

/// Errors from the upstream chat API layer.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    /// No API key is configured, so the relay cannot call upstream.
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    ///
    /// The request URL is stripped before the error is stored.
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    /// The API answered with a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The API answered successfully but produced no text.
    #[error("Gemini API returned no text")]
    EmptyResponse,
}

impl From<reqwest::Error> for AssistantError {
    fn from(err: reqwest::Error) -> Self {
        AssistantError::Request(err.without_url())
    }
}

impl From<AssistantError> for CoreError {
    fn from(err: AssistantError) -> Self {
        match err {
            AssistantError::MissingApiKey => CoreError::Config(err.to_string()),
            other => CoreError::Upstream(other.to_string()),
        }
    }
}
