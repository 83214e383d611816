//! # Data Models
//!
//! The status entry type, composite-key construction, and the fixed seed
//! dataset the service is initialized with.

pub mod status_entry;

// Re-export core models for easy access
pub use status_entry::{composite_key, seed_entries, StatusEntry};
