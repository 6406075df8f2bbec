//! User endpoints

use std::sync::Arc;

use axum::{
    extract::Path,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::DeletedResponse;
use crate::db::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::DbSession;
use crate::http::server::AppState;

/// Create user request
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub age: i64,
}

/// User response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            age: u.age,
        }
    }
}

/// POST /users/ - create a user
async fn create_user(
    DbSession(mut conn): DbSession,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserRepo::new(&mut conn).create(&req.name, req.age).await?;
    tracing::info!(user_id = user.id, "Created user");
    Ok(Json(UserResponse::from(user)))
}

/// GET /users/{name} - first user with this name
async fn get_user(
    DbSession(mut conn): DbSession,
    Path(name): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserRepo::new(&mut conn).find_by_name(&name).await?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /users/{user_id} - delete a user without posts
async fn delete_user(
    DbSession(mut conn): DbSession,
    Path(user_id): Path<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    UserRepo::new(&mut conn).delete(user_id).await?;
    tracing::info!(user_id, "Deleted user");
    Ok(Json(DeletedResponse {
        message: format!("User with id {} has been deleted.", user_id),
    }))
}

/// User routes
///
/// GET takes a name and DELETE takes an id in the same path segment, so
/// both hang off one route.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/", post(create_user))
        .route("/users/{user}", get(get_user).delete(delete_user))
}
