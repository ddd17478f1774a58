//! Wizard session - the single source of truth for one assessment.
//!
//! Owns the current step, the accumulated profile, the latest analysis
//! result, and the latest user-facing error message. All mutating
//! operations take `&mut self`, so while [`WizardSession::advance`] is
//! suspended on the analysis call no other operation can observe or touch
//! the session: the resolution of the pending call is structurally the
//! only event that can leave the `Analyzing` step.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::assessment::{AnalysisResult, AssessmentProfile, ProfileUpdate};
use crate::domain::foundation::{AssessmentId, StateMachine, TransitionError};
use crate::ports::RecommendationEngine;

use super::WizardStep;

/// Errors surfaced by wizard navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("advance is not available from the {0} step")]
    AdvanceUnavailable(WizardStep),

    #[error("retreat is not available from the {0} step")]
    RetreatUnavailable(WizardStep),

    #[error("an analysis is in progress; input is locked until it resolves")]
    AnalysisInProgress,
}

/// One assessment session from welcome screen to report.
///
/// The recommendation engine is injected at construction, so hosts wire a
/// real provider and tests wire a double without touching process state.
pub struct WizardSession {
    id: AssessmentId,
    step: WizardStep,
    profile: AssessmentProfile,
    result: Option<AnalysisResult>,
    error: Option<String>,
    engine: Arc<dyn RecommendationEngine>,
    started_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WizardSession {
    /// Creates a session at the welcome step with the default profile.
    pub fn new(engine: Arc<dyn RecommendationEngine>) -> Self {
        let now = Utc::now();
        let id = AssessmentId::new();
        info!(assessment = %id, "assessment session created");

        Self {
            id,
            step: WizardStep::Welcome,
            profile: AssessmentProfile::default(),
            result: None,
            error: None,
            engine,
            started_at: now,
            updated_at: now,
        }
    }

    /// Session identifier.
    pub fn id(&self) -> AssessmentId {
        self.id
    }

    /// Current step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Accumulated answers.
    pub fn profile(&self) -> &AssessmentProfile {
        &self.profile
    }

    /// Latest analysis, present only on the results step.
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Latest user-facing error message, if the last submission failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// When the session was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the session last changed.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Overwrites one profile facet.
    ///
    /// Valid in any step except `Analyzing`; the overwrite carries no
    /// cross-facet validation.
    pub fn update_field(&mut self, update: ProfileUpdate) -> Result<(), WizardError> {
        if self.step == WizardStep::Analyzing {
            return Err(WizardError::AnalysisInProgress);
        }

        self.profile.apply(update);
        self.touch();
        Ok(())
    }

    /// Leaves the welcome screen and opens the first question form.
    pub fn start(&mut self) -> Result<WizardStep, WizardError> {
        self.transition(WizardStep::Scenario)?;
        Ok(self.step)
    }

    /// Moves forward one step; on the final form step this submits the
    /// profile for analysis and suspends until the service answers.
    ///
    /// A failed analysis is fully recoverable: the session returns to the
    /// infrastructure step with the profile untouched and a single
    /// human-readable message in [`WizardSession::error`]. Every submission
    /// is a fresh attempt; no retry state is kept.
    pub async fn advance(&mut self) -> Result<WizardStep, WizardError> {
        match self.step {
            WizardStep::Scenario => self.transition(WizardStep::Tech)?,
            WizardStep::Tech => self.transition(WizardStep::Infra)?,
            WizardStep::Infra => self.run_analysis().await?,
            other => return Err(WizardError::AdvanceUnavailable(other)),
        }

        Ok(self.step)
    }

    /// Moves back one form step.
    pub fn retreat(&mut self) -> Result<WizardStep, WizardError> {
        let target = match self.step {
            WizardStep::Scenario => WizardStep::Welcome,
            WizardStep::Tech => WizardStep::Scenario,
            WizardStep::Infra => WizardStep::Tech,
            other => return Err(WizardError::RetreatUnavailable(other)),
        };

        self.transition(target)?;
        Ok(self.step)
    }

    /// Returns to the welcome screen and discards all session state.
    ///
    /// Unconditional: valid from every step, including the results screen.
    pub fn reset(&mut self) {
        info!(assessment = %self.id, "assessment session reset");
        self.step = WizardStep::Welcome;
        self.profile = AssessmentProfile::default();
        self.result = None;
        self.error = None;
        self.touch();
    }

    async fn run_analysis(&mut self) -> Result<(), WizardError> {
        self.transition(WizardStep::Analyzing)?;
        self.result = None;
        self.error = None;

        info!(assessment = %self.id, "submitting profile for analysis");

        match self.engine.recommend(&self.profile).await {
            Ok(result) => {
                info!(
                    assessment = %self.id,
                    recommendations = result.recommendations.len(),
                    "analysis complete"
                );
                self.result = Some(result);
                self.transition(WizardStep::Results)?;
            }
            Err(err) => {
                warn!(assessment = %self.id, error = %err, "analysis failed");
                self.error = Some(format!("生成报告失败，请检查配置后重试（{err}）"));
                self.transition(WizardStep::Infra)?;
            }
        }

        Ok(())
    }

    fn transition(&mut self, target: WizardStep) -> Result<(), TransitionError> {
        self.step = self.step.transition_to(target)?;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl std::fmt::Debug for WizardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardSession")
            .field("id", &self.id)
            .field("step", &self.step)
            .field("profile", &self.profile)
            .field("has_result", &self.result.is_some())
            .field("error", &self.error)
            .finish()
    }
}
