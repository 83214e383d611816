//! # Web Route Definitions
//!
//! Defines the HTTP route structure for the task status service.
//! Routes are organized into logical groups.

use axum::routing::get;
use axum::Router;

use crate::web::handlers;
use crate::web::state::AppState;

/// Create task status routes
///
/// The two-page form flow:
/// - `/taskStatus` - Render the status query form
/// - `/checkTaskStatus` - Run the lookup and render the result page
pub fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/taskStatus", get(handlers::status::show_status_form))
        .route("/checkTaskStatus", get(handlers::status::check_task_status))
}

/// Create health routes
///
/// - `/health` - Basic health check
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::basic_health))
}
