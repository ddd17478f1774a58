//! Assessment module - questionnaire input and analysis output types.

mod analysis;
mod profile;

pub use analysis::{AnalysisError, AnalysisResult, Recommendation};
pub use profile::{
    AssessmentProfile, BusinessType, Compatibility, Concurrency, CurrentStack, DataVolume,
    Deployment, FutureFocus, HaRequirement, HardwareArch, ProfileUpdate,
};
