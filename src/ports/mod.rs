//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RecommendationEngine` - Port for the external reasoning service that
//!   produces the database comparison report

mod recommendation_engine;

pub use recommendation_engine::{RecommendationEngine, RecommendationError};
