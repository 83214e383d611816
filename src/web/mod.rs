//! # Web Module
//!
//! Axum-based HTTP layer for the task status service.
//! Serves the status form, the status check, and a health probe.
//!
//! ## Core Components
//!
//! - [`routes`] - HTTP route definitions and organization
//! - [`handlers`] - Request handlers for the form, check, and health endpoints
//! - [`extractors`] - Query binding with service-shaped rejections
//! - [`middleware`] - Request ID generation
//! - [`state`] - Shared application state
//! - [`views`] - Server-rendered HTML pages

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod views;

use axum::Router;
use state::AppState;

/// Create the main Axum application with all routes and middleware
///
/// This is the entry point for the web layer, setting up:
/// - All route definitions
/// - Middleware stack (request IDs, timeout, CORS, tracing)
/// - Shared application state
///
/// # Example
///
/// ```no_run
/// use task_status_service::config::ServiceConfig;
/// use task_status_service::services::TaskStatusService;
/// use task_status_service::web::{create_app, state::AppState};
///
/// # tokio_test::block_on(async {
/// let config = ServiceConfig::load().unwrap();
/// let state = AppState::new(config.web.clone(), TaskStatusService::new());
/// let app = create_app(state);
///
/// let listener = tokio::net::TcpListener::bind(&config.web.bind_address)
///     .await
///     .unwrap();
/// axum::serve(listener, app).await.unwrap();
/// # });
/// ```
pub fn create_app(app_state: AppState) -> Router {
    let request_timeout = std::time::Duration::from_millis(app_state.config.request_timeout_ms);

    Router::new()
        .merge(routes::status_routes())
        .merge(routes::health_routes())
        .layer(axum::middleware::from_fn(
            middleware::request_id::add_request_id,
        ))
        .layer(tower_http::timeout::TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(app_state)
}
