//! Recommendation Engine Port - Interface to the external reasoning service.
//!
//! This port abstracts the generative-AI service that turns an assessment
//! profile into a structured comparison report, so the wizard can run
//! against a real provider or a test double interchangeably.
//!
//! # Design
//!
//! - One request in, one typed result out; no streaming, no caching, no retry
//! - The implementation owns prompt construction and schema enforcement
//! - Error variants mirror the failure taxonomy at this boundary:
//!   configuration, transport/service, empty payload, schema violation
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct CannedEngine;
//!
//! #[async_trait]
//! impl RecommendationEngine for CannedEngine {
//!     async fn recommend(
//!         &self,
//!         profile: &AssessmentProfile,
//!     ) -> Result<AnalysisResult, RecommendationError> {
//!         Err(RecommendationError::EmptyResponse)
//!     }
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::assessment::{AnalysisResult, AssessmentProfile};

/// Port for the external recommendation service.
///
/// Implementations translate the profile into a provider request and the
/// provider's payload back into a validated [`AnalysisResult`], or fail
/// explicitly. Content quality is the service's responsibility; the
/// implementation's sole contract is a faithful, schema-locked translation
/// in both directions.
#[async_trait]
pub trait RecommendationEngine: Send + Sync {
    /// Produces a comparison report for a fully-populated profile.
    async fn recommend(
        &self,
        profile: &AssessmentProfile,
    ) -> Result<AnalysisResult, RecommendationError>;
}

/// Failures at the recommendation service boundary.
///
/// Callers that don't branch on the kind can rely on `Display` for a
/// single human-readable message.
#[derive(Debug, Error)]
pub enum RecommendationError {
    /// Missing or rejected credential for the service.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The outbound call itself failed (network, rate limit, server error).
    #[error("recommendation service error: {0}")]
    Service(String),

    /// The call succeeded but carried no analysis text.
    #[error("the service returned no analysis text")]
    EmptyResponse,

    /// Payload present but not parseable as, or not conforming to, the
    /// declared response schema.
    #[error("response violates the analysis schema: {0}")]
    SchemaViolation(String),
}

impl RecommendationError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a service error.
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service(message.into())
    }

    /// Creates a schema violation error.
    pub fn schema_violation(message: impl Into<String>) -> Self {
        Self::SchemaViolation(message.into())
    }
}
