//! # rubric-core
//!
//! Core types, errors, configuration, and tracing for the rubric
//! Architecture Decision Record analysis engine.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
