//! Analysis result - the structured report returned by the reasoning service.
//!
//! These types are the parsing side of the response contract: the wire
//! payload must carry every field or deserialization fails. Wire field
//! names are camelCase to match the declared response schema.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One candidate database product with the model's scoring and rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Product name, e.g. "OceanBase" or "TiDB".
    pub name: String,
    /// Suitability score. The service is asked for 0-100; see
    /// [`AnalysisResult::validate`] for the defensive check.
    pub score: i32,
    /// Why this product fits the assessed requirements.
    pub match_reason: String,
    /// Key advantages, in the order the model ranked them.
    pub pros: Vec<String>,
    /// Potential drawbacks, in the order the model ranked them.
    pub cons: Vec<String>,
    /// High-availability and deployment guidance.
    pub deployment_advice: String,
    /// Compatibility commentary for domestic hardware and Xinchuang standards.
    pub xinchuang_fit: String,
}

/// Executive summary plus the ranked candidate list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// High-level summary of the recommendation strategy.
    pub summary: String,
    /// Candidate solutions; the service is asked for 3-4 but any positive
    /// length must be tolerated downstream.
    pub recommendations: Vec<Recommendation>,
}

impl AnalysisResult {
    /// Returns the recommendations ordered by score, highest first.
    ///
    /// The sort is stable: candidates with equal scores keep the order the
    /// service returned them in.
    pub fn ranked(&self) -> Vec<&Recommendation> {
        let mut recs: Vec<&Recommendation> = self.recommendations.iter().collect();
        recs.sort_by(|a, b| b.score.cmp(&a.score));
        recs
    }

    /// Defensive check of the contractual expectations the wire schema
    /// cannot express: at least one recommendation, every score in 0-100.
    ///
    /// The recommendation count (3-4 by contract) is deliberately not
    /// checked; renderers tolerate any positive length.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.recommendations.is_empty() {
            return Err(AnalysisError::NoRecommendations);
        }

        for rec in &self.recommendations {
            if !(0..=100).contains(&rec.score) {
                return Err(AnalysisError::ScoreOutOfRange {
                    name: rec.name.clone(),
                    score: rec.score,
                });
            }
        }

        Ok(())
    }
}

/// Semantic violations of the analysis contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("the analysis contains no recommendations")]
    NoRecommendations,

    #[error("score {score} for \"{name}\" is outside the 0-100 range")]
    ScoreOutOfRange { name: String, score: i32 },
}
