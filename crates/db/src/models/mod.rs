//! Row structs and request DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! database row, plus any `Deserialize` payloads the API accepts for it.

pub mod article;
pub mod topic;
