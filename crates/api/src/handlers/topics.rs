//! Handlers for the `/topics` resource.

use axum::extract::State;
use axum::Json;
use ncnews_db::repositories::TopicRepo;

use crate::error::AppResult;
use crate::response::TopicsResponse;
use crate::state::AppState;

/// GET /api/topics
pub async fn list(State(state): State<AppState>) -> AppResult<Json<TopicsResponse>> {
    let topics = TopicRepo::list(&state.pool).await?;
    Ok(Json(TopicsResponse { topics }))
}
