//! Insight board state.

use serde::Serialize;

/// Tips the board starts with.
pub const DEFAULT_INSIGHTS: [&str; 3] = [
    "The '10-10-10' rule: Ask yourself how you'll feel about this decision in 10 minutes, 10 months, and 10 years. This helps you gain perspective.",
    "Don't strive for the perfect decision; aim for the best decision with the information you have. Progress is better than perfection.",
    "Limit your options. Decision fatigue is real. Narrow your choices down to the top 3-4 contenders to make analysis more manageable.",
];

/// Ordered list of decision-making tips, newest first.
///
/// Entries are only ever prepended; a failed refresh leaves them untouched
/// and records a transient error instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightBoard {
    insights: Vec<String>,
    is_loading: bool,
    error: Option<String>,
}

impl InsightBoard {
    /// Creates a board seeded with the given tips.
    pub fn new(seed: Vec<String>) -> Self {
        Self {
            insights: seed,
            is_loading: false,
            error: None,
        }
    }

    pub fn insights(&self) -> &[String] {
        &self.insights
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Marks a refresh as in flight and clears the previous error.
    pub fn begin_refresh(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Prepends the fetched tip.
    pub fn refresh_succeeded(&mut self, insight: impl Into<String>) {
        self.insights.insert(0, insight.into());
        self.is_loading = false;
    }

    /// Records the failure message without touching the list.
    pub fn refresh_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.is_loading = false;
    }
}

impl Default for InsightBoard {
    fn default() -> Self {
        Self::new(DEFAULT_INSIGHTS.iter().map(|s| s.to_string()).collect())
    }
}
