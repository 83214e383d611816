//! # Web API Integration Tests
//!
//! Integration tests for the web layer including:
//! - Status form and lookup endpoint testing
//! - Health monitoring endpoint testing
//! - Shared test server infrastructure

pub mod test_infrastructure;

/// Re-export common test utilities
pub use test_infrastructure::*;
