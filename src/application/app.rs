//! Composition root - wires providers, gateway, store and feeds together.

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::adapters::ai::{GeminiConfig, GeminiProvider, OpenAIConfig, OpenAIProvider};
use crate::adapters::gateway::LlmReasoningGateway;
use crate::adapters::storage::InMemoryDecisionStore;
use crate::config::{AiConfig, AiProvider, AppConfig};
use crate::domain::decision::Decision;
use crate::domain::foundation::{DecisionId, ValidationError};
use crate::ports::{AIError, AIProvider, DecisionStore, ReasoningGateway};

use super::seed::sample_decisions;
use super::{ConversationOrchestrator, InsightFeed};

/// Errors that can occur while assembling the app.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("AI provider setup failed: {0}")]
    Provider(#[from] AIError),

    #[error("sample history is invalid: {0}")]
    Seed(#[from] ValidationError),
}

/// The running assistant: one session, its history and the insight feed.
///
/// The session state and the decision history are owned separately; a
/// saved decision crosses from one to the other by value.
pub struct SolvioApp {
    orchestrator: ConversationOrchestrator,
    insights: InsightFeed,
    store: Arc<dyn DecisionStore>,
}

impl SolvioApp {
    /// Builds the app from configuration.
    ///
    /// A missing API key is not an error: the app starts with an
    /// unconfigured gateway and every AI request reports the missing key.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        if let Err(e) = config.validate() {
            warn!(error = %e, "AI configuration incomplete");
        }

        let gateway = Arc::new(build_gateway(&config.ai)?);
        let store = Arc::new(InMemoryDecisionStore::with_decisions(sample_decisions()?));
        Ok(Self::new(gateway, store))
    }

    /// Assembles the app around an existing gateway and store.
    pub fn new(gateway: Arc<dyn ReasoningGateway>, store: Arc<dyn DecisionStore>) -> Self {
        Self {
            orchestrator: ConversationOrchestrator::new(gateway.clone(), store.clone()),
            insights: InsightFeed::new(gateway),
            store,
        }
    }

    pub fn orchestrator(&self) -> &ConversationOrchestrator {
        &self.orchestrator
    }

    pub fn orchestrator_mut(&mut self) -> &mut ConversationOrchestrator {
        &mut self.orchestrator
    }

    pub fn insights(&self) -> &InsightFeed {
        &self.insights
    }

    pub fn insights_mut(&mut self) -> &mut InsightFeed {
        &mut self.insights
    }

    /// Saved decisions, most recent first.
    pub async fn history(&self) -> Vec<Decision> {
        self.store.list_recent_first().await
    }

    /// A single saved decision.
    pub async fn decision(&self, id: &DecisionId) -> Option<Decision> {
        self.store.get(id).await
    }
}

/// Picks the configured provider, or an unconfigured gateway if the
/// selected provider has no key.
fn build_gateway(config: &AiConfig) -> Result<LlmReasoningGateway, AIError> {
    let Some(api_key) = config.api_key() else {
        warn!(provider = ?config.provider, "no API key configured; AI requests will fail");
        return Ok(LlmReasoningGateway::unconfigured());
    };

    let provider: Arc<dyn AIProvider> = match config.provider {
        AiProvider::Gemini => {
            let mut settings = GeminiConfig::new(api_key).with_timeout(config.timeout());
            if let Some(model) = &config.model {
                settings = settings.with_model(model.clone());
            }
            if let Some(url) = &config.base_url {
                settings = settings.with_base_url(url.clone());
            }
            Arc::new(GeminiProvider::new(settings)?)
        }
        AiProvider::OpenAI => {
            let mut settings = OpenAIConfig::new(api_key).with_timeout(config.timeout());
            if let Some(model) = &config.model {
                settings = settings.with_model(model.clone());
            }
            if let Some(url) = &config.base_url {
                settings = settings.with_base_url(url.clone());
            }
            Arc::new(OpenAIProvider::new(settings)?)
        }
    };

    let info = provider.provider_info();
    info!(provider = %info.name, model = %info.model, "AI provider ready");
    Ok(LlmReasoningGateway::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gateway::MISSING_CREDENTIAL;
    use crate::domain::session::Phase;

    #[tokio::test]
    async fn unconfigured_app_starts_with_sample_history() {
        let app = SolvioApp::from_config(&AppConfig::default()).unwrap();

        let history = app.history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].problem(), "Deciding on a new career path");
        assert_eq!(app.orchestrator().state().phase(), Phase::Idle);
        assert_eq!(app.insights().board().insights().len(), 3);
    }

    #[tokio::test]
    async fn unconfigured_app_reports_missing_key_in_chat() {
        let mut app = SolvioApp::from_config(&AppConfig::default()).unwrap();

        app.orchestrator_mut().submit_text("Should I move?").await.unwrap();

        let last = app.orchestrator().state().messages().last().cloned().unwrap();
        assert_eq!(last.text(), MISSING_CREDENTIAL);
    }

    #[test]
    fn build_gateway_uses_selected_provider_key() {
        let config = AiConfig {
            provider: AiProvider::OpenAI,
            gemini_api_key: Some("gm-key".to_string()),
            ..Default::default()
        };
        assert!(!build_gateway(&config).unwrap().is_configured());

        let config = AiConfig {
            openai_api_key: Some("sk-key".to_string()),
            ..config
        };
        assert!(build_gateway(&config).unwrap().is_configured());
    }

    #[tokio::test]
    async fn decision_lookup_by_id() {
        let app = SolvioApp::from_config(&AppConfig::default()).unwrap();
        let id = DecisionId::from_string("sample-1").unwrap();

        assert!(app.decision(&id).await.is_some());
        assert!(app.decision(&DecisionId::new()).await.is_none());
    }
}
