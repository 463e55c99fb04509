//! Application layer - sequencing of domain steps and remote calls.
//!
//! - `ConversationOrchestrator` - drives a decision session through its phases
//! - `InsightFeed` - fetches decision-making tips on demand
//! - `SolvioApp` - composition root built from configuration

mod app;
mod insight_feed;
mod orchestrator;
mod seed;

pub use app::{AppError, SolvioApp};
pub use insight_feed::InsightFeed;
pub use orchestrator::{ConversationOrchestrator, NO_OPTIONS, UNMATCHED_RECOMMENDATION};
pub use seed::sample_decisions;
