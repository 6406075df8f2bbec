//! Custom Axum extractors

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::Sqlite;

use super::error::ApiError;
use super::server::AppState;

/// Connection scoped to a single request.
///
/// Acquired from the pool before the handler runs and returned to it when
/// the value drops, whichever way the handler exits.
pub struct DbSession(pub PoolConnection<Sqlite>);

impl FromRequestParts<Arc<AppState>> for DbSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let conn = state.pool.acquire().await?;
        Ok(Self(conn))
    }
}
