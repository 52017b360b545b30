//! Response envelopes.
//!
//! Each endpoint wraps its payload in a single named key (`topics`,
//! `articles`, `article`) rather than returning a bare value.

use ncnews_db::models::article::Article;
use ncnews_db::models::topic::Topic;
use serde::Serialize;

/// `{ "topics": [...] }`
#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<Topic>,
}

/// `{ "articles": [...] }`
#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    pub articles: Vec<Article>,
}

/// `{ "article": {...} }`
#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: Article,
}
