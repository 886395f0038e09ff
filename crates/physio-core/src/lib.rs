//! physio-core
//!
//! Pure domain types and storage key conventions.
//! No I/O here. This is the shared vocabulary of the outcomes system.

pub mod error;
pub mod models;
pub mod storage_keys;
