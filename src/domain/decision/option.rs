//! Candidate options and their pro/con analyses.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OptionId;

/// Pros and cons of a single option.
///
/// The remote service is asked for 2-3 items per side but nothing enforces
/// the count, so either list may be shorter or longer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProCon {
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

impl ProCon {
    pub fn new(pros: Vec<String>, cons: Vec<String>) -> Self {
        Self { pros, cons }
    }

    /// Returns true if neither side has any points.
    pub fn is_empty(&self) -> bool {
        self.pros.is_empty() && self.cons.is_empty()
    }
}

/// A candidate option within a decision session.
///
/// # Invariants
///
/// - `id` is stable for the lifetime of the session
/// - `analysis` is attached at most once and never replaced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOption {
    id: OptionId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    analysis: Option<ProCon>,
}

impl DecisionOption {
    /// Creates an option that has not been analyzed yet.
    pub fn new(id: OptionId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            analysis: None,
        }
    }

    /// Creates an option with its analysis already known (seed data).
    pub fn analyzed(id: OptionId, title: impl Into<String>, analysis: ProCon) -> Self {
        Self {
            id,
            title: title.into(),
            analysis: Some(analysis),
        }
    }

    /// Materializes options from generated titles, numbering them by position.
    pub fn from_titles(titles: Vec<String>) -> Vec<Self> {
        titles
            .into_iter()
            .enumerate()
            .map(|(index, title)| Self::new(OptionId::from_index(index), title))
            .collect()
    }

    pub fn id(&self) -> &OptionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn analysis(&self) -> Option<&ProCon> {
        self.analysis.as_ref()
    }

    /// Attaches the analysis. Returns false, leaving the option untouched,
    /// if an analysis is already present.
    pub fn attach_analysis(&mut self, analysis: ProCon) -> bool {
        if self.analysis.is_some() {
            return false;
        }
        self.analysis = Some(analysis);
        true
    }

    /// Returns true if the option carries a non-empty analysis.
    pub fn is_analyzed(&self) -> bool {
        self.analysis.as_ref().is_some_and(|a| !a.is_empty())
    }
}
