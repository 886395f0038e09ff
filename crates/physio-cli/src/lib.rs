//! physio-cli
//!
//! Operator tool over a local data directory: seed the measure library,
//! record measurements, query progress, and store re-evaluations.

pub mod commands;
pub mod config;
