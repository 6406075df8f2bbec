//! Post endpoints

use std::sync::Arc;

use axum::{
    extract::Path,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::users::UserResponse;
use super::DeletedResponse;
use crate::db::{Post, PostRepo, PostWithAuthor, User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::DbSession;
use crate::http::server::AppState;

/// Create post request
#[derive(Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    pub author_id: i64,
}

/// Post response, author embedded
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author_id: i64,
    pub author: Option<UserResponse>,
}

impl PostResponse {
    fn new(post: Post, author: Option<User>) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            author_id: post.author_id,
            author: author.map(UserResponse::from),
        }
    }
}

impl From<PostWithAuthor> for PostResponse {
    fn from(p: PostWithAuthor) -> Self {
        Self::new(p.post, p.author)
    }
}

/// POST /posts/ - create a post for an existing author
async fn create_post(
    DbSession(mut conn): DbSession,
    Json(req): Json<CreatePostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let author = UserRepo::new(&mut conn).get(req.author_id).await?;
    let post = PostRepo::new(&mut conn)
        .create(&req.title, &req.body, author.id)
        .await?;

    tracing::info!(post_id = post.id, author_id = author.id, "Created post");
    Ok(Json(PostResponse::new(post, Some(author))))
}

/// GET /post/ - every post, storage order, no pagination
async fn list_posts(DbSession(mut conn): DbSession) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = PostRepo::new(&mut conn).list().await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// DELETE /posts/{post_id}
async fn delete_post(
    DbSession(mut conn): DbSession,
    Path(post_id): Path<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    PostRepo::new(&mut conn).delete(post_id).await?;
    tracing::info!(post_id, "Deleted post");
    Ok(Json(DeletedResponse {
        message: format!("Post with id {} has been deleted.", post_id),
    }))
}

/// Post routes
///
/// Listing lives at `/post/` for existing clients; `/posts/` serves it too.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/posts/", get(list_posts).post(create_post))
        .route("/post/", get(list_posts))
        .route("/posts/{post_id}", delete(delete_post))
}
