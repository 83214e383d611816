//! # Web Middleware
//!
//! Middleware stack for the web layer. Cross-cutting request processing
//! lives here; the layers themselves are assembled in [`crate::web::create_app`].

pub mod request_id;
