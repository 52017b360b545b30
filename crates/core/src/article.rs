//! Validation rules for article requests.
//!
//! Path ids arrive as raw strings and vote deltas as untyped JSON, so both
//! are checked here before anything reaches the database.

use serde_json::Value;

use crate::error::CoreError;
use crate::types::DbId;

/// Parse an `article_id` path segment.
///
/// Anything that is not a base-10 integer fitting in a [`DbId`] is rejected
/// with [`CoreError::InvalidType`]. Negative and out-of-range ids are still
/// numbers, so they parse and simply fail the later lookup.
pub fn parse_article_id(raw: &str) -> Result<DbId, CoreError> {
    raw.parse::<DbId>().map_err(|_| CoreError::InvalidType)
}

/// Validate the `inc_votes` field of a vote patch.
///
/// - absent or `null` -> [`CoreError::MissingField`]
/// - not an integer that fits the `votes` column -> [`CoreError::InvalidType`]
///
/// ```
/// use ncnews_core::article::vote_delta;
/// use serde_json::json;
///
/// assert_eq!(vote_delta(Some(&json!(-20))).unwrap(), -20);
/// assert!(vote_delta(None).is_err());
/// ```
pub fn vote_delta(inc_votes: Option<&Value>) -> Result<i32, CoreError> {
    match inc_votes {
        None | Some(Value::Null) => Err(CoreError::MissingField),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or(CoreError::InvalidType),
        Some(_) => Err(CoreError::InvalidType),
    }
}
