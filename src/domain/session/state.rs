//! Transient state of one decision session.
//!
//! `SessionState` holds everything the assistant screen renders and applies
//! each step of the flow as a validated, synchronous mutation. The
//! application-layer orchestrator performs the remote calls in between.

use serde::Serialize;

use crate::domain::decision::{ChatMessage, Decision, DecisionOption, ProCon, Recommendation};
use crate::domain::foundation::{OptionId, StateMachine};

use super::{Phase, SessionError};

/// Greeting shown when the app starts.
pub const WELCOME_GREETING: &str = "Welcome to Solvio. How can I help you make a decision today?";

/// Greeting shown after a decision has been saved.
pub const NEXT_DECISION_GREETING: &str = "Let's tackle another decision. What's on your mind?";

/// Session state owned by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    phase: Phase,
    problem: String,
    messages: Vec<ChatMessage>,
    options: Vec<DecisionOption>,
    recommendation: Option<Recommendation>,
    is_loading: bool,
}

impl SessionState {
    /// State at app start.
    pub fn initial() -> Self {
        Self::greeting(WELCOME_GREETING)
    }

    /// State after a decision has been saved.
    pub fn after_reset() -> Self {
        Self::greeting(NEXT_DECISION_GREETING)
    }

    fn greeting(text: &str) -> Self {
        Self {
            phase: Phase::Idle,
            problem: String::new(),
            messages: vec![ChatMessage::assistant(text)],
            options: Vec::new(),
            recommendation: None,
            is_loading: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The first thing the user said in this session.
    pub fn problem(&self) -> &str {
        &self.problem
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn options(&self) -> &[DecisionOption] {
        &self.options
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// True when options exist and every one carries a non-empty analysis.
    pub fn all_options_analyzed(&self) -> bool {
        !self.options.is_empty() && self.options.iter().all(DecisionOption::is_analyzed)
    }

    /// Options still waiting for an analysis, as `(id, title)` pairs.
    pub fn pending_analyses(&self) -> Vec<(OptionId, String)> {
        self.options
            .iter()
            .filter(|o| o.analysis().is_none())
            .map(|o| (o.id().clone(), o.title().to_string()))
            .collect()
    }

    /// Whether the "analyze problem" trigger is offered.
    pub fn can_generate_options(&self) -> bool {
        self.phase == Phase::Clarifying && !self.is_loading
    }

    /// Whether the "get recommendation" trigger is offered.
    pub fn can_recommend(&self) -> bool {
        self.phase == Phase::AnalyzingOptions && self.all_options_analyzed() && !self.is_loading
    }

    /// Whether re-running analysis for unanalyzed options is offered.
    pub fn can_retry_analysis(&self) -> bool {
        self.phase == Phase::AnalyzingOptions
            && !self.is_loading
            && self.options.iter().any(|o| o.analysis().is_none())
    }

    /// Whether the "save" trigger is offered.
    pub fn can_save(&self) -> bool {
        self.phase == Phase::Done && self.recommendation.is_some() && !self.is_loading
    }

    /// Appends the user's message and moves into the clarifying conversation.
    ///
    /// The first message of a session becomes the problem statement.
    /// Returns the trimmed text that was recorded.
    pub fn record_user_turn(&mut self, text: &str) -> Result<String, SessionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SessionError::EmptyInput);
        }
        if !self.phase.accepts_user_text() {
            return Err(SessionError::InputNotAccepted(self.phase));
        }

        let next = self.phase.transition_to(Phase::Clarifying)?;
        if self.phase == Phase::Idle {
            self.problem = text.to_string();
        }
        self.messages.push(ChatMessage::user(text));
        self.phase = next;
        Ok(text.to_string())
    }

    /// Appends a message authored by the coach.
    pub fn push_assistant_message(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(text));
    }

    /// Enters `GeneratingOptions`.
    pub fn begin_option_generation(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Clarifying {
            return Err(SessionError::unavailable("analyze the problem", self.phase));
        }
        self.phase = self.phase.transition_to(Phase::GeneratingOptions)?;
        Ok(())
    }

    /// Materializes the generated options and enters `AnalyzingOptions`.
    ///
    /// An empty list is rejected and leaves the state untouched.
    pub fn options_generated(&mut self, titles: Vec<String>) -> Result<(), SessionError> {
        if titles.is_empty() {
            return Err(SessionError::NoOptions);
        }
        let next = self.phase.transition_to(Phase::AnalyzingOptions)?;
        self.options = DecisionOption::from_titles(titles);
        self.phase = next;
        Ok(())
    }

    /// Reports the failure and returns to `Clarifying`.
    pub fn option_generation_failed(&mut self, message: impl Into<String>) -> Result<(), SessionError> {
        self.phase = self.phase.transition_to(Phase::Clarifying)?;
        self.push_assistant_message(message);
        Ok(())
    }

    /// Folds one analysis result into its option by id.
    ///
    /// Returns false if no option has that id or it is already analyzed.
    pub fn attach_analysis(&mut self, id: &OptionId, analysis: ProCon) -> bool {
        self.options
            .iter_mut()
            .find(|o| o.id() == id)
            .is_some_and(|o| o.attach_analysis(analysis))
    }

    /// Guards re-running analysis for options that are still missing one.
    pub fn check_retry_analysis(&self) -> Result<(), SessionError> {
        if self.phase != Phase::AnalyzingOptions || self.pending_analyses().is_empty() {
            return Err(SessionError::unavailable("retry analysis", self.phase));
        }
        Ok(())
    }

    /// Enters `Recommending`, provided every option has been analyzed.
    pub fn begin_recommendation(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::AnalyzingOptions {
            return Err(SessionError::unavailable("get a recommendation", self.phase));
        }
        if !self.all_options_analyzed() {
            return Err(SessionError::OptionsNotAnalyzed);
        }
        self.phase = self.phase.transition_to(Phase::Recommending)?;
        Ok(())
    }

    /// Stores the recommendation and enters `Done`.
    pub fn recommendation_received(&mut self, recommendation: Recommendation) -> Result<(), SessionError> {
        self.phase = self.phase.transition_to(Phase::Done)?;
        self.recommendation = Some(recommendation);
        Ok(())
    }

    /// Reports the failure and returns to `AnalyzingOptions`.
    pub fn recommendation_failed(&mut self, message: impl Into<String>) -> Result<(), SessionError> {
        self.phase = self.phase.transition_to(Phase::AnalyzingOptions)?;
        self.push_assistant_message(message);
        Ok(())
    }

    /// Assembles the finished decision and resets the session.
    pub fn complete(&mut self) -> Result<Decision, SessionError> {
        if self.phase != Phase::Done {
            return Err(SessionError::unavailable("save", self.phase));
        }
        self.phase.transition_to(Phase::Idle)?;
        let Some(recommendation) = self.recommendation.take() else {
            return Err(SessionError::unavailable("save", self.phase));
        };

        let finished = std::mem::replace(self, Self::after_reset());
        Ok(Decision::new(finished.problem, finished.options, recommendation))
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initial()
    }
}
