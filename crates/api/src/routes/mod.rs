pub mod articles;
pub mod health;
pub mod topics;

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /topics                       GET   list topics
/// /articles                     GET   list articles
/// /articles/{article_id}        GET   fetch one article
///                               PATCH adjust its vote count
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/topics", topics::router())
        .nest("/articles", articles::router())
}

/// Catch-all for any path no route matched, or a method it does not serve.
pub async fn invalid_path() -> AppError {
    AppError::RouteNotFound
}
