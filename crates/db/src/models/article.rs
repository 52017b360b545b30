//! Article model and the vote patch payload.

use ncnews_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `articles` table.
///
/// Serializes to exactly the public article shape; `created_at` is rendered
/// with millisecond precision.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub article_id: DbId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    #[serde(serialize_with = "ncnews_core::types::serialize_millis")]
    pub created_at: Timestamp,
    pub votes: i32,
}

/// Body of `PATCH /api/articles/{article_id}`.
///
/// `inc_votes` is kept untyped so a wrong type can be reported as a domain
/// error instead of a deserialization failure. See
/// [`ncnews_core::article::vote_delta`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VotePatch {
    #[serde(default)]
    pub inc_votes: Option<serde_json::Value>,
}
