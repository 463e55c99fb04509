//! Decision Store Port - append-only history of saved decisions.

use async_trait::async_trait;

use crate::domain::decision::Decision;
use crate::domain::foundation::DecisionId;

/// Port for recording and browsing completed decisions.
///
/// Decisions are immutable once recorded; there is no update or delete.
#[async_trait]
pub trait DecisionStore: Send + Sync {
    /// Appends a decision to the end of the history.
    async fn record(&self, decision: Decision);

    /// Returns all decisions in insertion order.
    async fn list(&self) -> Vec<Decision>;

    /// Returns a single decision by id.
    async fn get(&self, id: &DecisionId) -> Option<Decision>;

    /// Returns all decisions, most recent first (display order).
    async fn list_recent_first(&self) -> Vec<Decision> {
        let mut decisions = self.list().await;
        decisions.reverse();
        decisions
    }
}
