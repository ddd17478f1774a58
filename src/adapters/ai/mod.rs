//! AI Engine Adapters.
//!
//! Implementations of the RecommendationEngine port.
//!
//! ## Available Adapters
//!
//! - `GeminiEngine` - Google Gemini with schema-constrained JSON output
//! - `MockEngine` - Configurable mock for testing and offline hosts

mod gemini_engine;
mod mock_engine;
mod schema;

pub use gemini_engine::{GeminiConfig, GeminiEngine};
pub use mock_engine::{MockEngine, MockFailure, MockOutcome};
pub use schema::{SchemaKind, SchemaNode, ANALYSIS_RESPONSE_SCHEMA};
