//! WizardStep enum representing the linear assessment flow.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The six stations of the assessment flow, in order.
///
/// `Analyzing` is transient: it is entered when the infrastructure step is
/// submitted and left only by the resolution of the pending analysis call,
/// never by user navigation. `Results` is terminal and exited only through
/// a session reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Welcome,
    Scenario,
    Tech,
    Infra,
    Analyzing,
    Results,
}

impl WizardStep {
    /// Returns all steps in flow order.
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Welcome,
            WizardStep::Scenario,
            WizardStep::Tech,
            WizardStep::Infra,
            WizardStep::Analyzing,
            WizardStep::Results,
        ]
    }

    /// True for the three steps that present a question form.
    pub fn is_form_step(&self) -> bool {
        matches!(self, WizardStep::Scenario | WizardStep::Tech | WizardStep::Infra)
    }

    /// 1-based position among the form steps, for progress display.
    pub fn form_position(&self) -> Option<usize> {
        match self {
            WizardStep::Scenario => Some(1),
            WizardStep::Tech => Some(2),
            WizardStep::Infra => Some(3),
            _ => None,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardStep::Welcome => "welcome",
            WizardStep::Scenario => "scenario",
            WizardStep::Tech => "tech",
            WizardStep::Infra => "infra",
            WizardStep::Analyzing => "analyzing",
            WizardStep::Results => "results",
        };
        f.write_str(name)
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStep::*;
        matches!(
            (self, target),
            (Welcome, Scenario)
                | (Scenario, Tech)
                | (Scenario, Welcome)
                | (Tech, Infra)
                | (Tech, Scenario)
                | (Infra, Analyzing)
                | (Infra, Tech)
                | (Analyzing, Results)
                | (Analyzing, Infra)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            Welcome => vec![Scenario],
            Scenario => vec![Tech, Welcome],
            Tech => vec![Infra, Scenario],
            Infra => vec![Analyzing, Tech],
            Analyzing => vec![Results, Infra],
            Results => vec![],
        }
    }
}
