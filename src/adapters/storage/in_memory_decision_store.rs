//! In-Memory Decision Store Adapter
//!
//! Keeps decision history for the lifetime of the process. Nothing is
//! written to disk.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::decision::Decision;
use crate::domain::foundation::DecisionId;
use crate::ports::DecisionStore;

/// In-memory, append-only decision history.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDecisionStore {
    decisions: Arc<RwLock<Vec<Decision>>>,
}

impl InMemoryDecisionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `decisions`, oldest first
    pub fn with_decisions(decisions: Vec<Decision>) -> Self {
        Self {
            decisions: Arc::new(RwLock::new(decisions)),
        }
    }

    /// Number of recorded decisions
    pub async fn len(&self) -> usize {
        self.decisions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.decisions.read().await.is_empty()
    }
}

#[async_trait]
impl DecisionStore for InMemoryDecisionStore {
    async fn record(&self, decision: Decision) {
        self.decisions.write().await.push(decision);
    }

    async fn list(&self) -> Vec<Decision> {
        self.decisions.read().await.clone()
    }

    async fn get(&self, id: &DecisionId) -> Option<Decision> {
        self.decisions
            .read()
            .await
            .iter()
            .find(|d| d.id() == id)
            .cloned()
    }
}
