//! Domain types and request validation rules for the news API.
//!
//! Nothing in this crate touches the network or the database, so every rule
//! here can be unit tested in isolation.

pub mod article;
pub mod error;
pub mod types;
