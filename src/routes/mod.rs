//! HTTP route handlers.
//!
//! The route table is static: the root greeting and the health probe. Both
//! routes accept any HTTP method, matching the original container demo,
//! and anything else falls through to axum's default 404 response.
//!
//! Request tracing is enabled via middleware that generates a unique
//! request ID for each incoming request, allowing correlation of all logs
//! within a request.

pub mod health;
pub mod root;

use axum::{middleware, routing::any, Router};

use crate::middleware::request_id_layer;

/// Creates the axum router with both routes and the request span layer.
pub fn create_router() -> Router {
    Router::new()
        .route("/", any(root::index))
        .route("/health", any(health::health))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
