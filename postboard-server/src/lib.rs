//! postboard-server: users and their posts over HTTP
//!
//! SQLite-backed storage with a thin axum layer on top. Every request
//! borrows one pooled connection for its whole lifetime.

pub mod db;
pub mod http;

pub use db::{create_memory_pool, create_pool, migrate, DbError};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
