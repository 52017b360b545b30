//! Custom extractors.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::Json;
use ncnews_core::article::parse_article_id;
use ncnews_core::error::CoreError;
use ncnews_core::types::DbId;
use ncnews_db::models::article::VotePatch;

use crate::error::AppError;

/// The `{article_id}` path segment, parsed as a number.
///
/// Axum's own `Path<DbId>` would reject a non-numeric segment with a plain
/// text body; this extractor turns it into the JSON "not a number" error
/// instead. A segment that does not even decode to UTF-8 is not a number
/// either.
#[derive(Debug, Clone, Copy)]
pub struct ArticleIdPath(pub DbId);

impl<S> FromRequestParts<S> for ArticleIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| CoreError::InvalidType)?;

        Ok(ArticleIdPath(parse_article_id(&raw)?))
    }
}

/// Body of a vote patch.
///
/// A blank body, or one not sent as JSON, counts as an empty payload so it
/// reaches the "missing required fields" check. Only a JSON body that fails
/// to parse is rejected here.
#[derive(Debug, Clone)]
pub struct VotePatchBody(pub VotePatch);

impl<S> FromRequest<S> for VotePatchBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_json_content_type);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(VotePatchBody(VotePatch::default()));
        }

        let Json(patch) = Json::<VotePatch>::from_bytes(&bytes)?;
        Ok(VotePatchBody(patch))
    }
}

fn is_json_content_type(value: &str) -> bool {
    let mime = value.split(';').next().unwrap_or_default().trim();
    mime.eq_ignore_ascii_case("application/json")
        || (mime.starts_with("application/") && mime.ends_with("+json"))
}
