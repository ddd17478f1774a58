//! Wizard module - the linear assessment flow and its session state.

mod session;
mod step;

pub use session::{WizardError, WizardSession};
pub use step::WizardStep;
