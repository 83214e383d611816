//! # Web API Test Infrastructure
//!
//! Common testing utilities and infrastructure for web integration tests.

use reqwest::Client;
use std::time::Duration;
use task_status_service::web::{create_app, state::AppState};
use task_status_service::{TaskStatusService, WebConfig};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test configuration for web integration tests
#[derive(Debug, Clone)]
pub struct WebTestConfig {
    pub base_url: String,
    pub bind_address: String,
    pub port: u16,
}

impl Default for WebTestConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Test client wrapper with request utilities
#[derive(Debug)]
pub struct WebTestClient {
    client: Client,
    config: WebTestConfig,
}

/// Test server instance that manages a running web server for tests
#[derive(Debug)]
pub struct TestServer {
    pub config: WebTestConfig,
    pub handle: JoinHandle<()>,
    pub shutdown_tx: tokio::sync::oneshot::Sender<()>,
}

impl TestServer {
    /// Start a test server with dynamic port allocation
    pub async fn start() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        // Find an available port
        let port = find_available_port().await?;

        // Create test configuration
        let config = WebTestConfig {
            port,
            base_url: format!("http://localhost:{port}"),
            bind_address: format!("127.0.0.1:{port}"),
        };

        // Seed the status table and build shared application state
        let web_config = WebConfig {
            bind_address: config.bind_address.clone(),
            ..Default::default()
        };
        let app_state = AppState::new(web_config, TaskStatusService::new());

        // Create the Axum app
        let app = create_app(app_state);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        // Bind to the selected port
        let listener = TcpListener::bind(&config.bind_address).await?;

        // Spawn the server
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("Server failed to start");
        });

        // Give the server a moment to start
        tokio::time::sleep(Duration::from_millis(50)).await;

        Ok(TestServer {
            config,
            handle,
            shutdown_tx,
        })
    }

    /// Shutdown the test server
    pub async fn shutdown(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        // Send shutdown signal
        let _ = self.shutdown_tx.send(());

        // Wait for server to shutdown with timeout
        tokio::time::timeout(Duration::from_secs(5), self.handle).await??;

        Ok(())
    }
}

impl WebTestClient {
    /// Create a new test client with default configuration
    pub fn new(config: WebTestConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self { client, config })
    }

    /// Create a new test client connected to a running test server
    pub fn for_server(test_server: &TestServer) -> Result<Self, Box<dyn std::error::Error>> {
        Self::new(test_server.config.clone())
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<reqwest::Response, reqwest::Error> {
        let url = format!("{}{}", self.config.base_url, path);
        self.client.get(&url).send().await
    }

    /// Make a GET request with URL-encoded query parameters
    pub async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::Response, reqwest::Error> {
        let url = format!("{}{}", self.config.base_url, path);
        self.client.get(&url).query(query).send().await
    }

    /// Get the base URL for this test client
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

/// Find an available port for testing
pub async fn find_available_port() -> Result<u16, Box<dyn std::error::Error + Send + Sync>> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(port)
}

/// Assert that a response is an HTML page with the expected status and return its body
pub async fn assert_html_response(
    response: reqwest::Response,
    expected_status: u16,
) -> Result<String, Box<dyn std::error::Error>> {
    assert_eq!(
        response.status().as_u16(),
        expected_status,
        "Unexpected status code"
    );

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("text/html"),
        "Expected an HTML response, got content type '{content_type}'"
    );

    let body = response.text().await?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_available_port() {
        let port = find_available_port().await.unwrap();
        // Port is u16, so it's always >= 0 and <= 65535 by definition
        // Just verify it's a reasonable port number (not 0 which is reserved)
        assert!(port > 0, "Port should not be 0 (reserved)");
    }

    #[test]
    fn test_web_test_config_default() {
        let config = WebTestConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }
}
