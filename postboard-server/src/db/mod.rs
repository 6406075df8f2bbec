//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Pooled connections, one per request - no shared Arc<Mutex<Connection>>
//! - Repositories borrow a connection instead of owning the pool
//! - Post listing JOINs authors - no N+1 queries
//! - Referential checks live here, not in schema constraints

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options};
pub use repos::*;
pub use schema::migrate;
