//! Conversation phase state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Where a decision session currently stands.
///
/// ```text
/// Idle -> Clarifying -> GeneratingOptions -> AnalyzingOptions -> Recommending -> Done
///            ^                 |                   ^                  |           |
///            +---- failure ----+                   +---- failure -----+           |
/// Idle <------------------------------------ save ----------------------------------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Waiting for the problem statement.
    #[default]
    Idle,
    /// Chatting with the coach about the problem.
    Clarifying,
    /// Waiting for candidate options.
    GeneratingOptions,
    /// Options exist; analyses are settling or have settled.
    AnalyzingOptions,
    /// Waiting for the recommendation.
    Recommending,
    /// Recommendation received; ready to save.
    Done,
}

impl Phase {
    /// Returns true if free-text user turns are accepted.
    pub fn accepts_user_text(&self) -> bool {
        matches!(self, Phase::Idle | Phase::Clarifying)
    }

    /// Returns true while a top-level request owns the phase.
    pub fn is_waiting(&self) -> bool {
        matches!(self, Phase::GeneratingOptions | Phase::Recommending)
    }
}

impl StateMachine for Phase {
    fn valid_transitions(&self) -> Vec<Self> {
        use Phase::*;
        match self {
            Idle => vec![Clarifying],
            Clarifying => vec![Clarifying, GeneratingOptions],
            GeneratingOptions => vec![AnalyzingOptions, Clarifying],
            AnalyzingOptions => vec![Recommending],
            Recommending => vec![Done, AnalyzingOptions],
            Done => vec![Idle],
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Idle => "IDLE",
            Phase::Clarifying => "CLARIFYING",
            Phase::GeneratingOptions => "GENERATING_OPTIONS",
            Phase::AnalyzingOptions => "ANALYZING_OPTIONS",
            Phase::Recommending => "RECOMMENDING",
            Phase::Done => "DONE",
        };
        write!(f, "{}", s)
    }
}
