//! Conversation orchestrator - drives one decision session.
//!
//! Owns the [`SessionState`], sequences calls to the reasoning gateway and
//! folds their results back in. Every change is published as a snapshot on
//! a `watch` channel so the presentation layer can re-render.
//!
//! Gateway failures never surface as `Err` here: they become assistant
//! messages and the phase falls back to where the user can retry.
//! [`SessionError`] is only returned for triggers the current state does not
//! offer, and in that case the state is left untouched.

use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::decision::{ChatMessage, Decision, Sender};
use crate::domain::session::{SessionError, SessionState};
use crate::ports::{
    AnalyzedOption, DecisionStore, Failure, HistoryTurn, ReasoningGateway, TurnRole,
};

/// Shown when option generation succeeds with nothing to analyze.
pub const NO_OPTIONS: &str = "Failed to generate options.";

/// Shown when the recommended choice names none of the session's options.
pub const UNMATCHED_RECOMMENDATION: &str = "Failed to get recommendation.";

/// Drives the phase machine of a single decision session.
pub struct ConversationOrchestrator {
    gateway: Arc<dyn ReasoningGateway>,
    store: Arc<dyn DecisionStore>,
    state: SessionState,
    updates: watch::Sender<SessionState>,
}

impl ConversationOrchestrator {
    /// Starts a fresh session with the welcome greeting.
    pub fn new(gateway: Arc<dyn ReasoningGateway>, store: Arc<dyn DecisionStore>) -> Self {
        let state = SessionState::initial();
        let (updates, _) = watch::channel(state.clone());
        Self {
            gateway,
            store,
            state,
            updates,
        }
    }

    /// Current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Receives a snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.updates.subscribe()
    }

    /// Handles free text typed by the user in `IDLE` or `CLARIFYING`.
    ///
    /// The first message of a session becomes the problem statement. The
    /// coach's reply, or the failure message, is appended as an assistant
    /// message.
    pub async fn submit_text(&mut self, text: &str) -> Result<(), SessionError> {
        let history = history_of(self.state.messages());
        let text = self.state.record_user_turn(text)?;
        debug!(phase = %self.state.phase(), turns = history.len(), "user turn recorded");
        self.begin_request();

        let reply = match self.gateway.chat_turn(&history, &text).await {
            Ok(reply) => reply,
            Err(failure) => {
                warn!(kind = ?failure.kind, "chat turn failed");
                failure.message
            }
        };
        self.state.push_assistant_message(reply);

        self.end_request();
        Ok(())
    }

    /// Generates options for the problem and analyzes each of them.
    ///
    /// Returns once every analysis has settled. Options whose analysis
    /// failed stay unanalyzed; see [`Self::retry_analysis`].
    pub async fn analyze_problem(&mut self) -> Result<(), SessionError> {
        self.state.begin_option_generation()?;
        debug!(phase = %self.state.phase(), "generating options");
        self.begin_request();

        let outcome = match self.gateway.generate_options(self.state.problem()).await {
            Ok(titles) => {
                info!(count = titles.len(), "options generated");
                match self.state.options_generated(titles) {
                    Ok(()) => {
                        self.publish();
                        self.run_analysis().await;
                        Ok(())
                    }
                    Err(SessionError::NoOptions) => {
                        warn!("option generation returned no options");
                        self.state.option_generation_failed(NO_OPTIONS)
                    }
                    Err(e) => Err(e),
                }
            }
            Err(failure) => {
                warn!(kind = ?failure.kind, "option generation failed");
                self.state.option_generation_failed(failure.message)
            }
        };

        self.end_request();
        outcome
    }

    /// Re-runs analysis for the options that are still missing one.
    pub async fn retry_analysis(&mut self) -> Result<(), SessionError> {
        self.state.check_retry_analysis()?;
        self.begin_request();
        self.run_analysis().await;
        self.end_request();
        Ok(())
    }

    /// Asks for a recommendation once every option has been analyzed.
    pub async fn get_recommendation(&mut self) -> Result<(), SessionError> {
        self.state.begin_recommendation()?;
        debug!(phase = %self.state.phase(), "requesting recommendation");
        self.begin_request();

        let options: Vec<AnalyzedOption> = self
            .state
            .options()
            .iter()
            .map(|o| AnalyzedOption {
                title: o.title().to_string(),
                analysis: o.analysis().cloned(),
            })
            .collect();

        let result = self
            .gateway
            .get_recommendation(self.state.problem(), &options)
            .await
            .and_then(|recommendation| {
                recommendation.matched_to(self.state.options()).map_err(|e| {
                    warn!(error = %e, "recommendation rejected");
                    Failure::shape(UNMATCHED_RECOMMENDATION)
                })
            });

        let outcome = match result {
            Ok(recommendation) => {
                info!(choice = %recommendation.choice, "recommendation received");
                self.state.recommendation_received(recommendation)
            }
            Err(failure) => {
                warn!(kind = ?failure.kind, "recommendation failed");
                self.state.recommendation_failed(failure.message)
            }
        };

        self.end_request();
        outcome
    }

    /// Records the finished decision and starts a new session.
    pub async fn save_and_reset(&mut self) -> Result<Decision, SessionError> {
        let decision = self.state.complete()?;
        self.store.record(decision.clone()).await;
        info!(decision_id = %decision.id(), "decision saved");
        self.publish();
        Ok(decision)
    }

    /// Analyzes every pending option concurrently and folds each result
    /// into its own option once the whole batch has settled.
    async fn run_analysis(&mut self) {
        let pending = self.state.pending_analyses();
        if pending.is_empty() {
            return;
        }

        let problem = self.state.problem().to_string();
        let gateway: &dyn ReasoningGateway = self.gateway.as_ref();
        let total = pending.len();

        let calls = pending.into_iter().map(|(id, title)| {
            let problem = problem.as_str();
            async move {
                let result = gateway.analyze_option(problem, &title).await;
                (id, title, result)
            }
        });
        let results = join_all(calls).await;

        let mut failed = 0usize;
        for (id, title, result) in results {
            match result {
                Ok(analysis) => {
                    self.state.attach_analysis(&id, analysis);
                }
                Err(failure) => {
                    failed += 1;
                    warn!(option_id = %id, option = %title, kind = ?failure.kind, "analysis failed");
                }
            }
        }

        if failed > 0 {
            warn!(failed, total, "analysis settled with unanalyzed options");
        } else {
            debug!(total, "analysis settled");
        }
    }

    fn begin_request(&mut self) {
        self.state.set_loading(true);
        self.publish();
    }

    fn end_request(&mut self) {
        self.state.set_loading(false);
        self.publish();
    }

    fn publish(&self) {
        self.updates.send_replace(self.state.clone());
    }
}

fn history_of(messages: &[ChatMessage]) -> Vec<HistoryTurn> {
    messages
        .iter()
        .map(|m| {
            let role = match m.sender() {
                Sender::User => TurnRole::User,
                Sender::Assistant => TurnRole::Model,
            };
            HistoryTurn::new(role, m.text())
        })
        .collect()
}
