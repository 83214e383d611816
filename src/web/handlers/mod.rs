//! # Web Request Handlers
//!
//! Contains all HTTP request handlers organized by functional area.
//! Each module handles a specific aspect of the service.

pub mod health;
pub mod status;
