//! # Request ID Middleware
//!
//! Assigns each request a unique ID for log correlation and debugging.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use uuid::Uuid;

/// Attach a request ID to each HTTP request
///
/// The generated ID is stored in the request extensions for handlers, the
/// rest of the stack runs inside a span carrying it, and it is mirrored
/// back to the client as an `x-request-id` response header.
pub async fn add_request_id(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let span = tracing::info_span!("http_request", request_id = %request_id);
    let mut response = next.run(request).instrument(span).await;

    // Mirror the ID on the response (a UUID is always a valid header value)
    response
        .headers_mut()
        .insert("x-request-id", request_id.parse().unwrap());

    response
}

/// Request ID wrapper for extension storage
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    /// Get the request ID string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
