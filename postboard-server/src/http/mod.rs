//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses
//! - One pooled connection per request (`DbSession`)

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use extractors::DbSession;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
