//! Shared domain error types.

use thiserror::Error;

/// Rejected state-machine transition.
///
/// Carries the two states involved so callers can surface a precise message
/// without branching on the concrete state enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot transition from {from} to {to}")]
pub struct TransitionError {
    /// State the machine was in.
    pub from: String,
    /// State the transition asked for.
    pub to: String,
}

impl TransitionError {
    /// Creates a transition error from any pair of debug-printable states.
    pub fn new(from: impl std::fmt::Debug, to: impl std::fmt::Debug) -> Self {
        Self {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum Sample {
        Welcome,
        Results,
    }

    #[test]
    fn transition_error_names_both_states() {
        let err = TransitionError::new(Sample::Welcome, Sample::Results);
        assert_eq!(err.to_string(), "cannot transition from Welcome to Results");
    }
}
