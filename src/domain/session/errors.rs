//! Session-specific error types.
//!
//! These describe triggers the presentation layer should not have offered
//! in the current state. Remote failures are never session errors: they are
//! folded into the session as assistant messages.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

use super::Phase;

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Message content is empty or whitespace only.
    #[error("message cannot be empty")]
    EmptyInput,

    /// Free text was submitted outside the clarifying conversation.
    #[error("text input is not accepted while {0}")]
    InputNotAccepted(Phase),

    /// A trigger was used in a phase that does not offer it.
    #[error("cannot {action} while {phase}")]
    ActionUnavailable { action: &'static str, phase: Phase },

    /// Option generation came back without any options.
    #[error("option generation produced no options")]
    NoOptions,

    /// Recommendation requested before every option has an analysis.
    #[error("every option needs an analysis before a recommendation")]
    OptionsNotAnalyzed,

    /// Internal transition check failed.
    #[error(transparent)]
    InvalidTransition(#[from] ValidationError),
}

impl SessionError {
    pub fn unavailable(action: &'static str, phase: Phase) -> Self {
        SessionError::ActionUnavailable { action, phase }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_names_action_and_phase() {
        let err = SessionError::unavailable("save", Phase::Clarifying);
        assert_eq!(err.to_string(), "cannot save while CLARIFYING");
    }

    #[test]
    fn no_options_is_described() {
        assert_eq!(
            SessionError::NoOptions.to_string(),
            "option generation produced no options"
        );
    }

    #[test]
    fn input_not_accepted_names_phase() {
        let err = SessionError::InputNotAccepted(Phase::Done);
        assert_eq!(err.to_string(), "text input is not accepted while DONE");
    }
}
