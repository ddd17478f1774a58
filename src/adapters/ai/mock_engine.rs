//! Mock recommendation engine for testing.
//!
//! Configurable implementation of the RecommendationEngine port, allowing
//! the wizard to run without calling the real service.
//!
//! # Features
//!
//! - Pre-configured outcomes, consumed in order
//! - Error injection for every failure kind at the service boundary
//! - Call recording (the exact profiles submitted) for verification
//! - Optional simulated latency
//!
//! # Example
//!
//! ```ignore
//! let engine = MockEngine::new()
//!     .with_failure(MockFailure::EmptyResponse)
//!     .with_result(analysis);
//!
//! // First call fails, second succeeds.
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::assessment::{AnalysisResult, AssessmentProfile, Recommendation};
use crate::ports::{RecommendationEngine, RecommendationError};

/// Mock recommendation engine.
///
/// Clones share the outcome queue and the call log, so a test can keep a
/// handle for verification while the session owns another.
#[derive(Debug, Clone)]
pub struct MockEngine {
    /// Pre-configured outcomes (consumed in order).
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Profiles received, in call order.
    calls: Arc<Mutex<Vec<AssessmentProfile>>>,
}

/// A configured mock outcome.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Return a successful analysis.
    Success(AnalysisResult),
    /// Return an error.
    Failure(MockFailure),
}

/// Mock failure kinds, mirroring the service boundary taxonomy.
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// Simulate a missing or rejected credential.
    Configuration(String),
    /// Simulate a transport or service failure.
    Service(String),
    /// Simulate a response with no analysis text.
    EmptyResponse,
    /// Simulate a payload that violates the response schema.
    SchemaViolation(String),
}

impl From<MockFailure> for RecommendationError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::Configuration(message) => RecommendationError::Configuration(message),
            MockFailure::Service(message) => RecommendationError::Service(message),
            MockFailure::EmptyResponse => RecommendationError::EmptyResponse,
            MockFailure::SchemaViolation(message) => {
                RecommendationError::SchemaViolation(message)
            }
        }
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEngine {
    /// Creates a new mock engine with no queued outcomes.
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful analysis.
    pub fn with_result(self, result: AnalysisResult) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Success(result));
        self
    }

    /// Queues a failure.
    pub fn with_failure(self, failure: MockFailure) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Failure(failure));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this engine.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns the profiles received, in call order.
    pub fn calls(&self) -> Vec<AssessmentProfile> {
        self.calls.lock().unwrap().clone()
    }

    /// Clears the call log.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Gets the next outcome, or a canned default after exhaustion.
    fn next_outcome(&self) -> MockOutcome {
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockOutcome::Success(default_analysis()))
    }
}

/// Canned analysis returned once the configured queue runs dry.
fn default_analysis() -> AnalysisResult {
    AnalysisResult {
        summary: "Mock analysis".to_string(),
        recommendations: vec![Recommendation {
            name: "MockDB".to_string(),
            score: 75,
            match_reason: "default mock recommendation".to_string(),
            pros: vec!["predictable".to_string()],
            cons: vec!["imaginary".to_string()],
            deployment_advice: "none needed".to_string(),
            xinchuang_fit: "n/a".to_string(),
        }],
    }
}

#[async_trait]
impl RecommendationEngine for MockEngine {
    async fn recommend(
        &self,
        profile: &AssessmentProfile,
    ) -> Result<AnalysisResult, RecommendationError> {
        self.calls.lock().unwrap().push(*profile);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_outcome() {
            MockOutcome::Success(result) => Ok(result),
            MockOutcome::Failure(failure) => Err(failure.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(summary: &str) -> AnalysisResult {
        AnalysisResult {
            summary: summary.to_string(),
            recommendations: vec![Recommendation {
                name: "TiDB".to_string(),
                score: 80,
                match_reason: "fits".to_string(),
                pros: vec![],
                cons: vec![],
                deployment_advice: "spread replicas".to_string(),
                xinchuang_fit: "arm builds available".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn returns_queued_outcomes_in_order() {
        let engine = MockEngine::new()
            .with_result(analysis("first"))
            .with_result(analysis("second"));
        let profile = AssessmentProfile::default();

        assert_eq!(engine.recommend(&profile).await.unwrap().summary, "first");
        assert_eq!(engine.recommend(&profile).await.unwrap().summary, "second");
    }

    #[tokio::test]
    async fn returns_canned_default_after_exhaustion() {
        let engine = MockEngine::new().with_result(analysis("only"));
        let profile = AssessmentProfile::default();

        engine.recommend(&profile).await.unwrap();
        let fallback = engine.recommend(&profile).await.unwrap();
        assert_eq!(fallback.summary, "Mock analysis");
    }

    #[tokio::test]
    async fn injects_every_failure_kind() {
        let engine = MockEngine::new()
            .with_failure(MockFailure::Configuration("no key".to_string()))
            .with_failure(MockFailure::Service("503".to_string()))
            .with_failure(MockFailure::EmptyResponse)
            .with_failure(MockFailure::SchemaViolation("missing score".to_string()));
        let profile = AssessmentProfile::default();

        assert!(matches!(
            engine.recommend(&profile).await.unwrap_err(),
            RecommendationError::Configuration(_)
        ));
        assert!(matches!(
            engine.recommend(&profile).await.unwrap_err(),
            RecommendationError::Service(_)
        ));
        assert!(matches!(
            engine.recommend(&profile).await.unwrap_err(),
            RecommendationError::EmptyResponse
        ));
        assert!(matches!(
            engine.recommend(&profile).await.unwrap_err(),
            RecommendationError::SchemaViolation(_)
        ));
    }

    #[tokio::test]
    async fn records_the_profiles_received() {
        let engine = MockEngine::new();
        let mut profile = AssessmentProfile::default();
        engine.recommend(&profile).await.unwrap();

        profile.business_type = crate::domain::assessment::BusinessType::Htap;
        engine.recommend(&profile).await.unwrap();

        let calls = engine.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[1].business_type,
            crate::domain::assessment::BusinessType::Htap
        );

        engine.clear_calls();
        assert_eq!(engine.call_count(), 0);
    }

    #[tokio::test]
    async fn clones_share_the_queue_and_call_log() {
        let engine = MockEngine::new().with_result(analysis("shared"));
        let observer = engine.clone();
        let profile = AssessmentProfile::default();

        engine.recommend(&profile).await.unwrap();
        assert_eq!(observer.call_count(), 1);
    }

    #[tokio::test]
    async fn respects_configured_delay() {
        let engine = MockEngine::new().with_delay(Duration::from_millis(20));
        let profile = AssessmentProfile::default();

        let start = std::time::Instant::now();
        engine.recommend(&profile).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
