use crate::types::DbId;

/// Message shared by every "not a number" failure, whether it is the path id
/// or the vote delta that is wrong. Clients match on this exact text.
pub const INVALID_TYPE_MSG: &str = "Incorrect type - this must be a number";

/// Message returned when a required body field is absent.
pub const MISSING_FIELD_MSG: &str = "missing required fields";

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{}", INVALID_TYPE_MSG)]
    InvalidType,

    #[error("{}", MISSING_FIELD_MSG)]
    MissingField,

    #[error("No {entity} found for {key}: {id}")]
    NotFound {
        entity: &'static str,
        key: &'static str,
        id: DbId,
    },
}

impl CoreError {
    /// Shorthand for a missing article, keyed by `article_id`.
    pub fn article_not_found(id: DbId) -> Self {
        CoreError::NotFound {
            entity: "article",
            key: "article_id",
            id,
        }
    }
}
