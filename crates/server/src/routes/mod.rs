//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: Liveness, readiness and server metadata
//! - `users`: Id lookups and criteria search over the record store

pub mod health;
pub mod users;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /).
///
/// # Response
///
/// ```json
/// {
///   "name": "userdir Server",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "userdir Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "GET /user/{id}",
            "GET /users/{ids}",
            "POST /users/search",
            "GET /health",
            "GET /ready",
            "GET /metadata"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
