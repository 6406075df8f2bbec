//! User repository
//!
//! - create: plain INSERT, names are not unique
//! - find_by_name: first match only, order left to SQLite
//! - delete: guarded by a post-count check inside one transaction

use sqlx::{Connection, FromRow, SqliteConnection};

use super::DbError;

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// User repository
pub struct UserRepo<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> UserRepo<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Insert a user and return it with its generated id.
    pub async fn create(&mut self, name: &str, age: i64) -> Result<User, DbError> {
        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (name, age)
            VALUES (?, ?)
            RETURNING id, name, age
            "#,
        )
        .bind(name)
        .bind(age)
        .fetch_one(&mut *self.conn)
        .await?;

        tracing::debug!(user_id = user.id, "user created");
        Ok(user)
    }

    /// Get a user by id.
    pub async fn get(&mut self, id: i64) -> Result<User, DbError> {
        sqlx::query_as("SELECT id, name, age FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| DbError::not_found_id("user", id))
    }

    /// Get the first user with exactly this name.
    ///
    /// Duplicate names are allowed; which duplicate comes back is up to
    /// SQLite's scan order.
    pub async fn find_by_name(&mut self, name: &str) -> Result<User, DbError> {
        sqlx::query_as("SELECT id, name, age FROM users WHERE name = ? LIMIT 1")
            .bind(name)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "user",
                key: format!("name '{}'", name),
            })
    }

    /// Delete a user that no post references.
    ///
    /// Existence check, reference check and delete share one transaction.
    /// Dropping the transaction on an early return rolls it back.
    pub async fn delete(&mut self, id: i64) -> Result<(), DbError> {
        let mut tx = self.conn.begin().await?;

        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(DbError::not_found_id("user", id));
        }

        let post_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE author_id = ?")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        if post_count > 0 {
            tracing::debug!(user_id = id, post_count, "user still referenced by posts");
            return Err(DbError::HasPosts { user_id: id });
        }

        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::debug!(user_id = id, "user deleted");
        Ok(())
    }
}
