//! HTTP server layer
//!
//! Axum server with:
//! - CORS for every origin
//! - Request tracing and timeouts
//! - Graceful shutdown
//! - JSON error responses, including unknown routes

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
