//! Core domain types for the inflammation study statistics tool.
//!
//! Holds the validated patient-by-day [`models::Table`], the statistics
//! kernels, the error taxonomy shared by all crates, and CLI settings.

pub mod error;
pub mod models;
pub mod settings;
pub mod stats;

pub use error::{AnalysisError, Result};
