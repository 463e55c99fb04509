//! Integration tests for a full decision session.
//!
//! Drives the app through its public API with the real gateway on top of the
//! scripted mock provider:
//! 1. Describe the problem and chat with the coach
//! 2. Generate options and analyze them concurrently
//! 3. Get a recommendation and save the decision
//! 4. Browse history

use std::sync::Arc;

use solvio::adapters::ai::{MockAIProvider, MockError};
use solvio::adapters::gateway::{LlmReasoningGateway, MISSING_CREDENTIAL, OPTIONS_FAILED};
use solvio::adapters::storage::InMemoryDecisionStore;
use solvio::application::{sample_decisions, SolvioApp};
use solvio::config::AppConfig;
use solvio::domain::session::{Phase, NEXT_DECISION_GREETING};

// =============================================================================
// Test Infrastructure
// =============================================================================

const PROBLEM: &str = "Deciding on a new career path";
const OPTIONS_JSON: &str = r#"{"options":["Software Development","UX/UI Design","Data Science"]}"#;
const ANALYSIS_JSON: &str = r#"{"pros":["Good prospects","Interesting"],"cons":["Takes time"]}"#;

fn app_with(provider: &MockAIProvider) -> (SolvioApp, Arc<InMemoryDecisionStore>) {
    let gateway = Arc::new(LlmReasoningGateway::new(Arc::new(provider.clone())));
    let store = Arc::new(InMemoryDecisionStore::with_decisions(sample_decisions().unwrap()));
    (SolvioApp::new(gateway, store.clone()), store)
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn full_session_appends_one_analyzed_decision() {
    let provider = MockAIProvider::new()
        .with_response("What do you enjoy most in your current job?")
        .with_response(OPTIONS_JSON)
        .with_response(ANALYSIS_JSON)
        .with_response(ANALYSIS_JSON)
        .with_response(ANALYSIS_JSON)
        .with_response(r#"{"choice":"Software Development","reasoning":"Matches your love of building things."}"#);
    let (mut app, store) = app_with(&provider);

    app.orchestrator_mut().submit_text(PROBLEM).await.unwrap();
    assert_eq!(app.orchestrator().state().phase(), Phase::Clarifying);

    app.orchestrator_mut().analyze_problem().await.unwrap();
    let state = app.orchestrator().state();
    assert_eq!(state.phase(), Phase::AnalyzingOptions);
    let ids: Vec<_> = state.options().iter().map(|o| o.id().as_str()).collect();
    assert_eq!(ids, vec!["0", "1", "2"]);
    assert!(state.can_recommend());

    app.orchestrator_mut().get_recommendation().await.unwrap();
    assert_eq!(app.orchestrator().state().phase(), Phase::Done);

    let decision = app.orchestrator_mut().save_and_reset().await.unwrap();
    assert_eq!(decision.recommendation().choice, "Software Development");
    assert!(decision.options().iter().all(|o| o.is_analyzed()));

    let state = app.orchestrator().state();
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.messages().len(), 1);
    assert_eq!(state.messages()[0].text(), NEXT_DECISION_GREETING);

    assert_eq!(store.len().await, 2);
    let history = app.history().await;
    assert_eq!(history[0].id(), decision.id());
    assert_eq!(history[1].id().as_str(), "sample-1");
    assert_eq!(provider.call_count(), 6);
}

#[tokio::test]
async fn failed_analysis_can_be_retried() {
    let provider = MockAIProvider::new()
        .with_response("Tell me more.")
        .with_response(OPTIONS_JSON)
        .with_response(ANALYSIS_JSON)
        .with_error(MockError::Unavailable {
            message: "overloaded".into(),
        })
        .with_response(ANALYSIS_JSON)
        .with_response(ANALYSIS_JSON);
    let (mut app, _store) = app_with(&provider);

    app.orchestrator_mut().submit_text(PROBLEM).await.unwrap();
    app.orchestrator_mut().analyze_problem().await.unwrap();

    let state = app.orchestrator().state();
    let unanalyzed = state.options().iter().filter(|o| o.analysis().is_none()).count();
    assert_eq!(unanalyzed, 1);
    assert!(!state.can_recommend());

    app.orchestrator_mut().retry_analysis().await.unwrap();

    assert!(app.orchestrator().state().can_recommend());
    assert_eq!(provider.call_count(), 6);
}

#[tokio::test]
async fn malformed_options_revert_to_clarifying() {
    let provider = MockAIProvider::new()
        .with_response("Tell me more.")
        .with_response("1. Stay 2. Leave");
    let (mut app, store) = app_with(&provider);

    app.orchestrator_mut().submit_text(PROBLEM).await.unwrap();
    app.orchestrator_mut().analyze_problem().await.unwrap();

    let state = app.orchestrator().state();
    assert_eq!(state.phase(), Phase::Clarifying);
    assert!(state.options().is_empty());
    assert_eq!(state.messages().last().map(|m| m.text()), Some(OPTIONS_FAILED));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn missing_credential_never_leaves_clarifying() {
    let mut app = SolvioApp::from_config(&AppConfig::default()).unwrap();

    app.orchestrator_mut().submit_text(PROBLEM).await.unwrap();
    app.orchestrator_mut().analyze_problem().await.unwrap();

    let state = app.orchestrator().state();
    assert_eq!(state.phase(), Phase::Clarifying);
    let failures = state
        .messages()
        .iter()
        .filter(|m| m.text() == MISSING_CREDENTIAL)
        .count();
    assert_eq!(failures, 2);

    app.insights_mut().refresh().await;
    assert_eq!(app.insights().board().error(), Some(MISSING_CREDENTIAL));
}

#[tokio::test]
async fn insight_refresh_prepends() {
    let provider = MockAIProvider::new().with_response("Decide with your future self in mind.");
    let (mut app, _store) = app_with(&provider);

    app.insights_mut().refresh().await;

    let board = app.insights().board();
    assert_eq!(board.insights().len(), 4);
    assert_eq!(board.insights()[0], "Decide with your future self in mind.");
}
