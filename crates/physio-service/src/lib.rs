//! physio-service
//!
//! Orchestrates the outcome rules over an injected [`MeasurementStore`]:
//! recording and editing measurements, progress queries, and re-evaluation
//! batches. Every write emits an audit event.
//!
//! [`MeasurementStore`]: physio_storage::store::MeasurementStore

pub mod audit;
pub mod config;
pub mod error;
pub mod service;

pub use service::OutcomesService;
