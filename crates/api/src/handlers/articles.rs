//! Handlers for the `/articles` resource.

use axum::extract::State;
use axum::Json;
use ncnews_core::article::vote_delta;
use ncnews_core::error::CoreError;
use ncnews_db::repositories::ArticleRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ArticleIdPath, VotePatchBody};
use crate::response::{ArticleResponse, ArticlesResponse};
use crate::state::AppState;

/// GET /api/articles
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ArticlesResponse>> {
    let articles = ArticleRepo::list(&state.pool).await?;
    Ok(Json(ArticlesResponse { articles }))
}

/// GET /api/articles/{article_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ArticleIdPath(id): ArticleIdPath,
) -> AppResult<Json<ArticleResponse>> {
    let article = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::article_not_found(id)))?;
    Ok(Json(ArticleResponse { article }))
}

/// PATCH /api/articles/{article_id}
///
/// The body is checked before the id, so `{}` is always answered with
/// "missing required fields" no matter what the path holds.
pub async fn patch_votes(
    State(state): State<AppState>,
    id: Result<ArticleIdPath, AppError>,
    body: Result<VotePatchBody, AppError>,
) -> AppResult<Json<ArticleResponse>> {
    let VotePatchBody(patch) = body?;
    let delta = vote_delta(patch.inc_votes.as_ref())?;
    let ArticleIdPath(id) = id?;

    let article = ArticleRepo::increment_votes(&state.pool, id, delta)
        .await?
        .ok_or(AppError::Core(CoreError::article_not_found(id)))?;

    tracing::info!(
        article_id = id,
        inc_votes = delta,
        votes = article.votes,
        "Article votes updated"
    );

    Ok(Json(ArticleResponse { article }))
}
