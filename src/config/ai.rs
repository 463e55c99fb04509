//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Which hosted model API to talk to
    #[serde(default)]
    pub provider: AiProvider,

    /// Google Gemini API key
    pub gemini_api_key: Option<String>,

    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// Model override; each provider has its own default
    pub model: Option<String>,

    /// API base URL override
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Gemini,
    OpenAI,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if Gemini is configured
    pub fn has_gemini(&self) -> bool {
        non_blank(&self.gemini_api_key).is_some()
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        non_blank(&self.openai_api_key).is_some()
    }

    /// API key for the selected provider, if one is set
    pub fn api_key(&self) -> Option<&str> {
        match self.provider {
            AiProvider::Gemini => non_blank(&self.gemini_api_key),
            AiProvider::OpenAI => non_blank(&self.openai_api_key),
        }
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        if self.api_key().is_none() {
            return Err(ValidationError::MissingRequired(match self.provider {
                AiProvider::Gemini => "GEMINI_API_KEY",
                AiProvider::OpenAI => "OPENAI_API_KEY",
            }));
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::default(),
            gemini_api_key: None,
            openai_api_key: None,
            model: None,
            base_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn non_blank(key: &Option<String>) -> Option<&str> {
    key.as_deref().filter(|k| !k.trim().is_empty())
}

fn default_timeout() -> u64 {
    60
}
