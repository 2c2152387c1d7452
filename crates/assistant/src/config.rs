/// Settings for the upstream generative-language API.
///
/// | Env var                     | Default                                               |
/// |-----------------------------|-------------------------------------------------------|
/// | `GEMINI_API_KEY`            | unset (chat disabled)                                 |
/// | `GEMINI_MODEL`              | `gemini-2.0-flash`                                    |
/// | `GEMINI_API_URL`            | `https://generativelanguage.googleapis.com/v1beta`    |
/// | `GEMINI_TIMEOUT_SECS`       | `30`                                                  |
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
    pub timeout_secs: u64,
}

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AssistantConfig {
    /// Load from environment variables, falling back to defaults.
    ///
    /// A blank `GEMINI_API_KEY` counts as unset.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let api_url = std::env::var("GEMINI_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.into())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = std::env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key,
            model,
            api_url,
            timeout_secs,
        }
    }
}
