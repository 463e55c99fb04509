//! State machine trait for phase enums.
//!
//! Gives lifecycle enums a single place to declare their legal transitions
//! and a validated `transition_to` built on top of it.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors list the valid targets for each state and get validated
/// transition helpers for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for Phase {
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Idle => vec![Clarifying],
///             Clarifying => vec![Clarifying, GeneratingOptions],
///             // ... etc
///         }
///     }
/// }
///
/// let next = phase.transition_to(Phase::GeneratingOptions)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Off,
        On,
        Broken,
    }

    impl StateMachine for Light {
        fn valid_transitions(&self) -> Vec<Self> {
            match self {
                Light::Off => vec![Light::On, Light::Broken],
                Light::On => vec![Light::Off, Light::Broken],
                Light::Broken => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_listed_target() {
        assert_eq!(Light::Off.transition_to(Light::On), Ok(Light::On));
    }

    #[test]
    fn transition_to_fails_for_unlisted_target() {
        assert!(Light::Broken.transition_to(Light::On).is_err());
    }

    #[test]
    fn is_terminal_only_without_targets() {
        assert!(Light::Broken.is_terminal());
        assert!(!Light::On.is_terminal());
    }
}
