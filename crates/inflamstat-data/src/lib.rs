//! Data ingestion layer for inflamstat.
//!
//! Responsible for discovering dataset files in a study directory,
//! parsing them into patient-by-day tables and running the aggregation
//! pipeline that produces the per-day standard deviation series.

pub mod analysis;
pub mod loader;
pub mod source;

pub use inflamstat_core as core;
