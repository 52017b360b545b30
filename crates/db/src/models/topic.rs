//! Topic model.

use serde::Serialize;
use sqlx::FromRow;

/// A row from the `topics` table. Read-only through the API.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}
