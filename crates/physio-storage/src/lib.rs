//! physio-storage
//!
//! The measurement store contract consumed by the service layer, plus an
//! in-memory store and a JSON file-tree store.

pub mod error;
pub mod fs;
pub mod memory;
pub mod objects;
pub mod state;
pub mod store;
