//! userdir Server - HTTP REST API for the user directory
//!
//! This crate exposes the record store over HTTP. The store is decoded once
//! at startup and shared read-only by every request handler.
//!
//! # Features
//!
//! - **Lookups**: single id and comma-separated id lists
//! - **Search**: conjunctive field criteria over every record
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: JSON error bodies with stable error codes
//! - **Graceful Shutdown**: Proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe with record count
//! - `GET /metadata` - Version, uptime and record count
//! - `GET /user/{id}` - One user; 400 for a malformed id, 404 when absent
//! - `GET /users/{ids}` - `{"users": [...]}` for the ids that exist
//! - `POST /users/search` - `{"users": [...]}` matching every criterion,
//!   404 `NO_MATCH` when nothing matches
//!
//! Errors are returned as `{"error": {"code": "...", "message": "..."}}`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
