//! DB Selector - AI-Assisted Database Selection Advisor
//!
//! This crate orchestrates a multi-step assessment wizard that turns
//! infrastructure requirements into a structured database comparison
//! report generated by Google's Gemini API.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
