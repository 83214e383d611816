//! # Services
//!
//! Application services providing the lookup logic behind the web layer.
//!
//! ## Available Services
//!
//! - [`TaskStatusService`]: Exact-match status lookup over the seeded table

pub mod task_status;

pub use task_status::{TaskStatusService, INVALID_LOOKUP_MESSAGE};
