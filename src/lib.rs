//! # Task Status Service
//!
//! A small web service for checking student task submission status.
//!
//! ## Overview
//!
//! The service holds a fixed in-memory table mapping composite
//! `studentId + "-" + taskId` keys to human-readable status strings, seeded
//! once at startup and immutable thereafter. An HTML form accepts the two
//! identifiers and the service renders the matching status, or the literal
//! fallback `"Invalid Task ID or Student ID"` when no entry exists. A lookup
//! miss is a normal outcome, never an error.
//!
//! ## Module Organization
//!
//! - [`models`] - The status entry type and the seed dataset
//! - [`services`] - The status lookup service
//! - [`web`] - Axum routes, handlers, views, and middleware
//! - [`config`] - Configuration management
//! - [`error`] - Structured error handling
//! - [`logging`] - Console tracing setup
//!
//! ## Quick Start
//!
//! ```rust
//! use task_status_service::services::TaskStatusService;
//!
//! let service = TaskStatusService::new();
//!
//! assert_eq!(service.lookup("student123", "task001"), "Submitted");
//! assert_eq!(
//!     service.lookup("student999", "taskXXX"),
//!     "Invalid Task ID or Student ID"
//! );
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib    # Unit tests
//! cargo test          # All tests, including the HTTP functional suite
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod web;

pub use config::{ServiceConfig, WebConfig};
pub use error::{ServiceError, ServiceResult};
pub use models::{composite_key, seed_entries, StatusEntry};
pub use services::{TaskStatusService, INVALID_LOOKUP_MESSAGE};
