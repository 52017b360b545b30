//! Route definitions for articles.

use axum::routing::get;
use axum::Router;

use crate::handlers::articles;
use crate::state::AppState;

/// Article routes mounted at `/api/articles`.
///
/// ```text
/// GET   /                -> list
/// GET   /{article_id}    -> get_by_id
/// PATCH /{article_id}    -> patch_votes
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(articles::list)).route(
        "/{article_id}",
        get(articles::get_by_id).patch(articles::patch_votes),
    )
}
