//! # Custom Axum Extractors
//!
//! Custom extractors for the status endpoints. Query binding failures are
//! surfaced as [`ServiceError`] responses instead of axum's plain-text
//! rejections, so every error leaving the service has the same JSON shape.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use crate::error::ServiceError;

/// Query parameters for a status check
///
/// Both parameters are required by the binding layer: a request missing
/// either one is rejected with 400 before the handler runs. Present but
/// empty values flow through to the lookup unchanged.
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    #[serde(rename = "studentId")]
    pub student_id: String,

    #[serde(rename = "taskId")]
    pub task_id: String,
}

/// Status-check parameter extractor
///
/// Wraps [`Query`] so that a missing `studentId` or `taskId` rejects with
/// the service's JSON error body rather than the default rejection. Keeps
/// the handler itself infallible.
#[derive(Debug)]
pub struct StatusParams(pub StatusQuery);

impl<S> FromRequestParts<S> for StatusParams
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<StatusQuery>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ServiceError::bad_request(rejection.body_text()))?;

        Ok(Self(query))
    }
}
