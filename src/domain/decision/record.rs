//! Saved decision record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DecisionId, Timestamp};

use super::{DecisionOption, Recommendation};

/// A completed decision, as kept in history.
///
/// Created once when the user saves a finished session and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    id: DecisionId,
    problem: String,
    options: Vec<DecisionOption>,
    recommendation: Recommendation,
    /// Long-form calendar date, e.g. "October 26, 2023".
    date: String,
}

impl Decision {
    /// Assembles a new decision dated today.
    pub fn new(
        problem: impl Into<String>,
        options: Vec<DecisionOption>,
        recommendation: Recommendation,
    ) -> Self {
        Self {
            id: DecisionId::new(),
            problem: problem.into(),
            options,
            recommendation,
            date: Timestamp::now().display_date(),
        }
    }

    /// Reconstitutes a decision saved earlier, keeping its id and date.
    pub fn reconstitute(
        id: DecisionId,
        problem: impl Into<String>,
        options: Vec<DecisionOption>,
        recommendation: Recommendation,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            problem: problem.into(),
            options,
            recommendation,
            date: date.into(),
        }
    }

    // === Accessors ===

    pub fn id(&self) -> &DecisionId {
        &self.id
    }

    pub fn problem(&self) -> &str {
        &self.problem
    }

    pub fn options(&self) -> &[DecisionOption] {
        &self.options
    }

    pub fn recommendation(&self) -> &Recommendation {
        &self.recommendation
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the option that was recommended, if it is present.
    pub fn chosen_option(&self) -> Option<&DecisionOption> {
        self.options
            .iter()
            .find(|o| o.title() == self.recommendation.choice)
    }
}
