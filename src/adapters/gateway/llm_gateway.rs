//! LLM-backed implementation of the ReasoningGateway port.
//!
//! Builds the coach's prompts, declares the expected JSON shapes, and maps
//! whatever comes back (or fails to) onto typed results. The underlying
//! error is logged; callers only ever see the fixed, user-facing message
//! for the capability that failed.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error};

use crate::domain::decision::{ProCon, Recommendation};
use crate::ports::{
    AIError, AIProvider, AnalyzedOption, CompletionRequest, Failure, GatewayResult, HistoryTurn,
    Message, MessageRole, ReasoningGateway, TurnRole,
};

use super::prompts;

pub const MISSING_CREDENTIAL: &str = "API Key not configured.";
pub const CHAT_FAILED: &str = "Failed to get a response from AI.";
pub const OPTIONS_FAILED: &str = "Failed to generate options.";
pub const ANALYSIS_FAILED: &str = "Failed to analyze option.";
pub const RECOMMENDATION_FAILED: &str = "Failed to get recommendation.";
pub const INSIGHT_FAILED: &str = "Failed to get a new insight.";

/// Reasoning gateway on top of an [`AIProvider`].
///
/// Constructed without a provider when no credential is configured; every
/// call then fails immediately with [`MISSING_CREDENTIAL`].
#[derive(Clone)]
pub struct LlmReasoningGateway {
    provider: Option<Arc<dyn AIProvider>>,
}

impl LlmReasoningGateway {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// A gateway with no credential configured.
    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    /// Returns true if a provider is available.
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Runs one completion, mapping provider errors to `failure_message`.
    async fn exchange(
        &self,
        operation: &'static str,
        request: CompletionRequest,
        failure_message: &'static str,
    ) -> GatewayResult<String> {
        let Some(provider) = self.provider.as_ref() else {
            debug!(operation, "gateway call rejected: no credential configured");
            return Err(Failure::configuration(MISSING_CREDENTIAL));
        };

        let info = provider.provider_info();
        debug!(operation, provider = %info.name, model = %info.model, "sending completion request");

        match provider.complete(request).await {
            Ok(response) => {
                debug!(
                    operation,
                    total_tokens = response.usage.total_tokens,
                    "completion received"
                );
                Ok(response.content)
            }
            Err(err) => {
                error!(operation, error = %err, "completion failed");
                Err(failure_from(&err, failure_message))
            }
        }
    }
}

#[async_trait]
impl ReasoningGateway for LlmReasoningGateway {
    async fn chat_turn(&self, history: &[HistoryTurn], new_message: &str) -> GatewayResult<String> {
        let request = CompletionRequest::new()
            .with_system_prompt(prompts::COACH_PERSONA)
            .with_history(history.iter().map(to_message))
            .with_message(MessageRole::User, new_message);

        self.exchange("chat_turn", request, CHAT_FAILED).await
    }

    async fn generate_options(&self, problem: &str) -> GatewayResult<Vec<String>> {
        let request = CompletionRequest::new()
            .with_message(MessageRole::User, prompts::options_prompt(problem))
            .with_json_schema(prompts::options_schema());

        let text = self.exchange("generate_options", request, OPTIONS_FAILED).await?;
        let payload: OptionsPayload = parse_json("generate_options", &text, OPTIONS_FAILED)?;

        let options: Vec<String> = payload
            .options
            .into_iter()
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        if options.is_empty() {
            error!(operation = "generate_options", "reply contained no options");
            return Err(Failure::shape(OPTIONS_FAILED));
        }
        Ok(options)
    }

    async fn analyze_option(&self, problem: &str, option_title: &str) -> GatewayResult<ProCon> {
        let request = CompletionRequest::new()
            .with_message(MessageRole::User, prompts::analysis_prompt(problem, option_title))
            .with_json_schema(prompts::analysis_schema());

        let text = self.exchange("analyze_option", request, ANALYSIS_FAILED).await?;
        let analysis: ProCon = parse_json("analyze_option", &text, ANALYSIS_FAILED)?;

        if analysis.is_empty() {
            error!(operation = "analyze_option", option = option_title, "reply had no pros or cons");
            return Err(Failure::shape(ANALYSIS_FAILED));
        }
        Ok(analysis)
    }

    async fn get_recommendation(
        &self,
        problem: &str,
        options: &[AnalyzedOption],
    ) -> GatewayResult<Recommendation> {
        let options_json = serde_json::to_string(options).map_err(|e| {
            error!(operation = "get_recommendation", error = %e, "could not serialize options");
            Failure::shape(RECOMMENDATION_FAILED)
        })?;

        let request = CompletionRequest::new()
            .with_message(
                MessageRole::User,
                prompts::recommendation_prompt(problem, &options_json),
            )
            .with_json_schema(prompts::recommendation_schema());

        let text = self
            .exchange("get_recommendation", request, RECOMMENDATION_FAILED)
            .await?;
        let recommendation: Recommendation =
            parse_json("get_recommendation", &text, RECOMMENDATION_FAILED)?;

        if recommendation.choice.trim().is_empty() {
            error!(operation = "get_recommendation", "reply had an empty choice");
            return Err(Failure::shape(RECOMMENDATION_FAILED));
        }
        Ok(recommendation)
    }

    async fn get_insight(&self) -> GatewayResult<String> {
        let request = CompletionRequest::new().with_message(MessageRole::User, prompts::INSIGHT_PROMPT);

        let text = self.exchange("get_insight", request, INSIGHT_FAILED).await?;
        Ok(text.trim().to_string())
    }
}

#[derive(Debug, Deserialize)]
struct OptionsPayload {
    options: Vec<String>,
}

fn to_message(turn: &HistoryTurn) -> Message {
    match turn.role {
        TurnRole::User => Message::user(turn.text.clone()),
        TurnRole::Model => Message::assistant(turn.text.clone()),
    }
}

fn failure_from(err: &AIError, message: &'static str) -> Failure {
    if err.is_shape_error() {
        Failure::shape(message)
    } else {
        Failure::transport(message)
    }
}

/// Parses a structured reply, tolerating a surrounding markdown code fence.
fn parse_json<T: DeserializeOwned>(
    operation: &'static str,
    text: &str,
    failure_message: &'static str,
) -> GatewayResult<T> {
    serde_json::from_str(strip_code_fence(text)).map_err(|e| {
        error!(operation, error = %e, "reply did not match the requested shape");
        Failure::shape(failure_message)
    })
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::ports::{FailureKind, ResponseFormat};

    fn gateway(provider: &MockAIProvider) -> LlmReasoningGateway {
        LlmReasoningGateway::new(Arc::new(provider.clone()))
    }

    #[tokio::test]
    async fn every_capability_fails_fast_without_credential() {
        let gateway = LlmReasoningGateway::unconfigured();
        assert!(!gateway.is_configured());

        let results = [
            gateway.chat_turn(&[], "hi").await.map(|_| ()),
            gateway.generate_options("p").await.map(|_| ()),
            gateway.analyze_option("p", "o").await.map(|_| ()),
            gateway.get_recommendation("p", &[]).await.map(|_| ()),
            gateway.get_insight().await.map(|_| ()),
        ];

        for result in results {
            let failure = result.unwrap_err();
            assert_eq!(failure.kind, FailureKind::Configuration);
            assert_eq!(failure.message, MISSING_CREDENTIAL);
        }
    }

    #[tokio::test]
    async fn chat_turn_sends_persona_history_and_new_message() {
        let provider = MockAIProvider::new().with_response("What matters most to you?");
        let history = vec![
            HistoryTurn::new(TurnRole::Model, "Welcome"),
            HistoryTurn::new(TurnRole::User, "Should I change jobs?"),
        ];

        let reply = gateway(&provider).chat_turn(&history, "I feel stuck").await.unwrap();

        assert_eq!(reply, "What matters most to you?");
        let calls = provider.get_calls();
        let call = &calls[0];
        assert_eq!(call.system_prompt.as_deref(), Some(prompts::COACH_PERSONA));
        assert_eq!(call.messages.len(), 3);
        assert_eq!(call.messages[0].role, MessageRole::Assistant);
        assert_eq!(call.messages[2].content, "I feel stuck");
        assert_eq!(call.response_format, ResponseFormat::Text);
    }

    #[tokio::test]
    async fn chat_turn_maps_transport_error() {
        let provider = MockAIProvider::new().with_error(MockError::Network {
            message: "connection reset".into(),
        });

        let failure = gateway(&provider).chat_turn(&[], "hi").await.unwrap_err();

        assert_eq!(failure.kind, FailureKind::Transport);
        assert_eq!(failure.message, CHAT_FAILED);
    }

    #[tokio::test]
    async fn generate_options_parses_titles() {
        let provider = MockAIProvider::new()
            .with_response(r#"{"options":["Software Development","UX/UI Design","Data Science"]}"#);

        let options = gateway(&provider)
            .generate_options("Deciding on a new career path")
            .await
            .unwrap();

        assert_eq!(options, vec!["Software Development", "UX/UI Design", "Data Science"]);
        assert!(provider.get_calls()[0].schema().is_some());
    }

    #[tokio::test]
    async fn generate_options_rejects_wrong_shape() {
        let provider = MockAIProvider::new().with_response("Here are some ideas: rent, buy");

        let failure = gateway(&provider).generate_options("p").await.unwrap_err();

        assert_eq!(failure.kind, FailureKind::Shape);
        assert_eq!(failure.message, OPTIONS_FAILED);
    }

    #[tokio::test]
    async fn generate_options_rejects_empty_list() {
        let provider = MockAIProvider::new().with_response(r#"{"options":["  "]}"#);
        let failure = gateway(&provider).generate_options("p").await.unwrap_err();
        assert_eq!(failure.kind, FailureKind::Shape);
    }

    #[tokio::test]
    async fn analyze_option_parses_fenced_json() {
        let provider = MockAIProvider::new()
            .with_response("```json\n{\"pros\":[\"High demand\"],\"cons\":[\"Sedentary\"]}\n```");

        let analysis = gateway(&provider).analyze_option("p", "Software Development").await.unwrap();

        assert_eq!(analysis.pros, vec!["High demand"]);
        assert_eq!(analysis.cons, vec!["Sedentary"]);
    }

    #[tokio::test]
    async fn analyze_option_rejects_empty_analysis() {
        let provider = MockAIProvider::new().with_response(r#"{"pros":[],"cons":[]}"#);
        let failure = gateway(&provider).analyze_option("p", "o").await.unwrap_err();
        assert_eq!(failure.message, ANALYSIS_FAILED);
    }

    #[tokio::test]
    async fn get_recommendation_embeds_options_in_prompt() {
        let provider = MockAIProvider::new()
            .with_response(r#"{"choice":"Rent","reasoning":"Keeps options open"}"#);
        let options = vec![
            AnalyzedOption {
                title: "Rent".into(),
                analysis: Some(ProCon::new(vec!["Flexible".into()], vec![])),
            },
            AnalyzedOption {
                title: "Buy".into(),
                analysis: None,
            },
        ];

        let rec = gateway(&provider).get_recommendation("Housing", &options).await.unwrap();

        assert_eq!(rec, Recommendation::new("Rent", "Keeps options open"));
        let calls = provider.get_calls();
        let prompt = &calls[0].messages[0].content;
        assert!(prompt.contains(r#"{"title":"Rent","analysis":{"pros":["Flexible"],"cons":[]}}"#));
    }

    #[tokio::test]
    async fn get_recommendation_rejects_missing_choice() {
        let provider = MockAIProvider::new().with_response(r#"{"reasoning":"no idea"}"#);
        let failure = gateway(&provider).get_recommendation("p", &[]).await.unwrap_err();
        assert_eq!(failure.kind, FailureKind::Shape);
        assert_eq!(failure.message, RECOMMENDATION_FAILED);
    }

    #[tokio::test]
    async fn get_insight_returns_trimmed_text() {
        let provider = MockAIProvider::new().with_response("  Sleep on big decisions.\n");
        let insight = gateway(&provider).get_insight().await.unwrap();
        assert_eq!(insight, "Sleep on big decisions.");
    }

    #[tokio::test]
    async fn get_insight_maps_failure_message() {
        let provider = MockAIProvider::new().with_error(MockError::AuthenticationFailed);
        let failure = gateway(&provider).get_insight().await.unwrap_err();
        assert_eq!(failure.message, INSIGHT_FAILED);
    }

    #[test]
    fn strip_code_fence_handles_plain_and_fenced() {
        assert_eq!(strip_code_fence(" {\"a\":1} "), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n[]\n```"), "[]");
    }
}
