//! Post repository
//!
//! Author existence is the caller's concern; this repository only writes
//! and reads the `posts` table (plus a JOIN for listing).

use sqlx::{FromRow, Row, SqliteConnection};

use super::{DbError, User};

/// Post record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author_id: i64,
}

/// Post joined with its author for display
///
/// `author` is `None` only if the author row vanished after the post was
/// written; nothing in the schema prevents that.
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: Option<User>,
}

/// Post repository
pub struct PostRepo<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> PostRepo<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Insert a post and return it with its generated id.
    pub async fn create(&mut self, title: &str, body: &str, author_id: i64) -> Result<Post, DbError> {
        let post: Post = sqlx::query_as(
            r#"
            INSERT INTO posts (title, body, author_id)
            VALUES (?, ?, ?)
            RETURNING id, title, body, author_id
            "#,
        )
        .bind(title)
        .bind(body)
        .bind(author_id)
        .fetch_one(&mut *self.conn)
        .await?;

        tracing::debug!(post_id = post.id, author_id, "post created");
        Ok(post)
    }

    /// List every post with its author.
    ///
    /// Single LEFT JOIN (no N+1), so every post is listed even without an
    /// author row. No ORDER BY: rows come back in storage order.
    pub async fn list(&mut self) -> Result<Vec<PostWithAuthor>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT
                p.id,
                p.title,
                p.body,
                p.author_id,
                u.name AS author_name,
                u.age AS author_age
            FROM posts p
            LEFT JOIN users u ON u.id = p.author_id
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        let items = rows
            .into_iter()
            .map(|r| {
                let author_id: i64 = r.get("author_id");
                let author_name: Option<String> = r.get("author_name");
                let author_age: Option<i64> = r.get("author_age");
                PostWithAuthor {
                    post: Post {
                        id: r.get("id"),
                        title: r.get("title"),
                        body: r.get("body"),
                        author_id,
                    },
                    author: author_name.zip(author_age).map(|(name, age)| User {
                        id: author_id,
                        name,
                        age,
                    }),
                }
            })
            .collect();

        Ok(items)
    }

    /// Delete a post by id.
    pub async fn delete(&mut self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found_id("post", id));
        }

        tracing::debug!(post_id = id, "post deleted");
        Ok(())
    }
}
