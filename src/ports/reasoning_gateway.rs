//! Reasoning Gateway Port - the decision coach's remote capabilities.
//!
//! Each operation turns one exchange with the remote model into a typed
//! result. Failures carry a user-displayable message; the orchestrator only
//! distinguishes success from failure, never the kind.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::decision::{ProCon, Recommendation};

/// Result of a gateway call.
pub type GatewayResult<T> = Result<T, Failure>;

/// Port for the five reasoning capabilities.
///
/// Every call is a single attempt: no retries and no partial results.
#[async_trait]
pub trait ReasoningGateway: Send + Sync {
    /// Sends the accumulated history plus a new user message to the coach
    /// and returns its free-text reply.
    async fn chat_turn(&self, history: &[HistoryTurn], new_message: &str) -> GatewayResult<String>;

    /// Asks for distinct, actionable option titles for a problem.
    ///
    /// Typically three, but the count is not guaranteed.
    async fn generate_options(&self, problem: &str) -> GatewayResult<Vec<String>>;

    /// Asks for the pros and cons of a single option.
    async fn analyze_option(&self, problem: &str, option_title: &str) -> GatewayResult<ProCon>;

    /// Asks which analyzed option is best and why.
    async fn get_recommendation(
        &self,
        problem: &str,
        options: &[AnalyzedOption],
    ) -> GatewayResult<Recommendation>;

    /// Fetches one concise decision-making tip.
    async fn get_insight(&self) -> GatewayResult<String>;
}

/// One prior turn of the clarifying conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryTurn {
    pub role: TurnRole,
    pub text: String,
}

impl HistoryTurn {
    pub fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Author of a history turn, from the model's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Model,
}

/// An option title with its (possibly missing) analysis, as sent for a
/// recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedOption {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ProCon>,
}

/// A failed gateway call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Failure {
    pub kind: FailureKind,
    /// User-displayable message.
    pub message: String,
}

impl Failure {
    /// No credential configured; raised before any network attempt.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Configuration, message)
    }

    /// The network or the remote service failed.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Transport, message)
    }

    /// The reply did not have the requested shape.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Shape, message)
    }

    fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Failure taxonomy. Kept for logging and tests; callers treat all kinds alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Configuration,
    Transport,
    Shape,
}
