//! # Task Status Server
//!
//! Binary for running the task status service as a standalone web server.
//!
//! ## Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin task-status-server
//!
//! # Run with a specific environment and bind address
//! APP_ENV=production BIND_ADDRESS=0.0.0.0:8080 cargo run --bin task-status-server
//! ```

use tokio::signal;
use tracing::{error, info};

use task_status_service::config::ServiceConfig;
use task_status_service::error::ServiceResult;
use task_status_service::logging;
use task_status_service::services::TaskStatusService;
use task_status_service::web::{create_app, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging first
    logging::init_tracing();

    info!("🚀 Starting Task Status Server...");
    info!("   Version: {}", env!("CARGO_PKG_VERSION"));
    info!(
        "   Build Mode: {}",
        if cfg!(debug_assertions) {
            "Debug"
        } else {
            "Release"
        }
    );

    if let Err(e) = run().await {
        error!("Task Status Server failed: {}", e);
        return Err(e.into());
    }

    info!("👋 Task Status Server shutdown complete");

    Ok(())
}

/// Load configuration, bind the listener, and serve until shutdown
///
/// Startup failures (configuration, bind) surface as `ServiceError` so the
/// binary exits nonzero with a logged cause.
async fn run() -> ServiceResult<()> {
    let config = ServiceConfig::load()?;

    info!("   Environment: {}", config.environment);

    let service = TaskStatusService::new();

    info!(
        "🔧 Status table seeded with {} entries",
        service.entry_count()
    );

    let state = AppState::new(config.web.clone(), service);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&config.web.bind_address).await?;
    let local_addr = listener.local_addr()?;

    info!("🎉 Task Status Server started successfully!");
    info!("   Listening on: http://{}", local_addr);
    info!("   Form page: http://{}/taskStatus", local_addr);
    info!("   Health probe: http://{}/health", local_addr);
    info!("   Press Ctrl+C to shutdown gracefully");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C");
        },
        _ = terminate => {
            info!("Received SIGTERM");
        },
    }
}
