//! # Web Application State
//!
//! Defines the shared state for the web layer: the status service and the
//! web configuration. Everything here is read-only after construction, so
//! the state is cheaply cloneable across handlers.

use std::sync::Arc;

use crate::config::WebConfig;
use crate::services::TaskStatusService;

/// Shared application state for the web layer
///
/// This state is shared across all request handlers and contains:
/// - The immutable task status service
/// - Web server configuration
#[derive(Clone, Debug)]
pub struct AppState {
    /// Web server configuration
    pub config: Arc<WebConfig>,

    /// Status lookup service, seeded at startup and never mutated
    pub task_status_service: Arc<TaskStatusService>,
}

impl AppState {
    /// Create application state from configuration and a seeded service
    pub fn new(config: WebConfig, task_status_service: TaskStatusService) -> Self {
        Self {
            config: Arc::new(config),
            task_status_service: Arc::new(task_status_service),
        }
    }
}
