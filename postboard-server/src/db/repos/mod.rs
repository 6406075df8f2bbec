//! Repository implementations for database access
//!
//! Repositories borrow the request's connection for the duration of a call.
//! Handlers decide how many repositories share that connection.

pub mod posts;
pub mod users;

pub use posts::{Post, PostRepo, PostWithAuthor};
pub use users::{User, UserRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} with {key} not found")]
    NotFound { resource: &'static str, key: String },

    #[error("Cannot delete user with id {user_id} because they have associated posts.")]
    HasPosts { user_id: i64 },
}

impl DbError {
    pub(crate) fn not_found_id(resource: &'static str, id: i64) -> Self {
        Self::NotFound {
            resource,
            key: format!("id {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            DbError::not_found_id("post", 7).to_string(),
            "post with id 7 not found"
        );
        assert_eq!(
            DbError::HasPosts { user_id: 3 }.to_string(),
            "Cannot delete user with id 3 because they have associated posts."
        );
    }
}
