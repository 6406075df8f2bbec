//! Route handlers organized by resource

pub mod health;
pub mod posts;
pub mod users;

use serde::Serialize;

/// Confirmation body for successful deletes
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}
