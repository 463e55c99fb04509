//! Insight feed - fetches decision-making tips on demand.
//!
//! Independent of the decision session: it only shares the gateway.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::insight::InsightBoard;
use crate::ports::ReasoningGateway;

/// Refresh loop over an [`InsightBoard`].
pub struct InsightFeed {
    gateway: Arc<dyn ReasoningGateway>,
    board: InsightBoard,
}

impl InsightFeed {
    /// Creates a feed seeded with the default tips.
    pub fn new(gateway: Arc<dyn ReasoningGateway>) -> Self {
        Self::with_board(gateway, InsightBoard::default())
    }

    pub fn with_board(gateway: Arc<dyn ReasoningGateway>, board: InsightBoard) -> Self {
        Self { gateway, board }
    }

    pub fn board(&self) -> &InsightBoard {
        &self.board
    }

    /// Fetches one new tip and prepends it.
    ///
    /// On failure the existing tips are kept and the board carries the
    /// error message until the next refresh.
    pub async fn refresh(&mut self) {
        self.board.begin_refresh();
        match self.gateway.get_insight().await {
            Ok(insight) => {
                debug!("insight received");
                self.board.refresh_succeeded(insight);
            }
            Err(failure) => {
                warn!(kind = ?failure.kind, "insight refresh failed");
                self.board.refresh_failed(failure.message);
            }
        }
    }
}
