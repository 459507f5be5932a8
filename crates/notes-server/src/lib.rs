//! notes-server: HTTP API server for the in-memory notes service
//!
//! This crate provides:
//! - The `/note` endpoint (create, read, update, delete)
//! - A `/health` liveness endpoint
//! - Graceful shutdown with a bounded grace period
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request ID generation and propagation
//! - Request tracing and logging
//! - Read (request body) and write (response) timeouts
//! - Plain-text error responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_server::{config::ServerConfig, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::from_env()?;
//!     server::run_server(config, server::shutdown_signal()).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use server::{ShutdownOutcome, build_app, run_server, serve, with_middleware};
pub use state::AppState;

// Re-export dependent crates
pub use notes_core;
pub use notes_store;
