//! Repository for the `topics` table.

use sqlx::PgPool;

use crate::models::topic::Topic;

pub struct TopicRepo;

impl TopicRepo {
    /// List every topic, ordered by slug.
    pub async fn list(pool: &PgPool) -> Result<Vec<Topic>, sqlx::Error> {
        sqlx::query_as::<_, Topic>("SELECT slug, description FROM topics ORDER BY slug")
            .fetch_all(pool)
            .await
    }
}
