//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions, keeping illegal moves explicitly rejected instead of
//! silently applied.

use super::TransitionError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for WizardStep {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Welcome, Scenario) | (Scenario, Tech) | /* ... */)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Welcome => vec![Scenario],
///             // ... etc
///         }
///     }
/// }
///
/// let next = step.transition_to(WizardStep::Tech)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, TransitionError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(TransitionError::new(self, target))
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
    enum Phase {
        Draft,
        Review,
        Published,
    }

    impl StateMachine for Phase {
        fn can_transition_to(&self, target: &Self) -> bool {
            use Phase::*;
            matches!((self, target), (Draft, Review) | (Review, Draft) | (Review, Published))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Phase::*;
            match self {
                Draft => vec![Review],
                Review => vec![Draft, Published],
                Published => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(Phase::Draft.transition_to(Phase::Review), Ok(Phase::Review));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let result = Phase::Draft.transition_to(Phase::Published);
        assert!(result.is_err());
    }

    #[test]
    fn is_terminal_only_for_states_without_exits() {
        assert!(Phase::Published.is_terminal());
        assert!(!Phase::Draft.is_terminal());
        assert!(!Phase::Review.is_terminal());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for phase in [Phase::Draft, Phase::Review, Phase::Published] {
            for target in phase.valid_transitions() {
                assert!(
                    phase.can_transition_to(&target),
                    "can_transition_to should accept {:?} -> {:?}",
                    phase,
                    target
                );
            }
        }
    }
}
