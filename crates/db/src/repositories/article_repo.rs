//! Repository for the `articles` table.

use ncnews_core::types::DbId;
use sqlx::PgPool;

use crate::models::article::Article;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "article_id, title, topic, author, body, created_at, votes";

/// Read and vote operations for articles. Articles are never created or
/// deleted through this repository.
pub struct ArticleRepo;

impl ArticleRepo {
    /// List all articles, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles ORDER BY created_at DESC");
        sqlx::query_as::<_, Article>(&query).fetch_all(pool).await
    }

    /// Find an article by id. Returns `None` if no row matches.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE article_id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Add `delta` to an article's vote count and return the updated row.
    ///
    /// The increment happens in a single `UPDATE`, so concurrent patches to
    /// the same article serialize on the row lock and none are lost.
    /// Returns `None` if no row with the given id exists.
    pub async fn increment_votes(
        pool: &PgPool,
        id: DbId,
        delta: i32,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET votes = votes + $2
             WHERE article_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(delta)
            .fetch_optional(pool)
            .await
    }
}
