//! # Task Status Handlers
//!
//! HTTP handlers for the status query form and the status check itself.
//! The check always returns 200: a lookup miss is rendered as the fallback
//! text, never surfaced as an HTTP error.

use axum::extract::State;
use axum::response::Html;
use tracing::{debug, info};

use crate::web::extractors::StatusParams;
use crate::web::state::AppState;
use crate::web::views;

/// Show the status query form: GET /taskStatus
pub async fn show_status_form(_state: State<AppState>) -> Html<String> {
    debug!("Rendering task status form");

    views::status_form_page()
}

/// Check a task status: GET /checkTaskStatus
///
/// Forms the composite key from the two query parameters, looks it up, and
/// re-renders the form with the echoed inputs and the labeled status block.
pub async fn check_task_status(
    State(state): State<AppState>,
    StatusParams(query): StatusParams,
) -> Html<String> {
    info!(
        student_id = %query.student_id,
        task_id = %query.task_id,
        "Checking task status"
    );

    let status = state
        .task_status_service
        .lookup(&query.student_id, &query.task_id);

    debug!(status = %status, "Task status resolved");

    views::status_result_page(&query.student_id, &query.task_id, status)
}
