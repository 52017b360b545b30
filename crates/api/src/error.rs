use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ncnews_core::error::{CoreError, INVALID_TYPE_MSG};
use serde_json::json;

/// Message for requests that match no route.
pub const INVALID_PATH_MSG: &str = "Invalid path";

/// Generic message for anything the client cannot act on.
const INTERNAL_MSG: &str = "Internal server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "msg": ... }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `ncnews_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matched the request path.
    #[error("{}", INVALID_PATH_MSG)]
    RouteNotFound,

    /// An internal error with a message that is logged, never returned.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// A JSON body that fails to parse or to match the payload shape.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::InvalidType | CoreError::MissingField => {
                    (StatusCode::BAD_REQUEST, core.to_string())
                }
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, INVALID_PATH_MSG.to_string()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MSG.to_string())
            }
        };

        (status, axum::Json(json!({ "msg": message }))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - Invalid text representation (`22P02`) and numeric overflow (`22003`)
///   map to 400 with the shared "not a number" message.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::Database(db_err)
            if matches!(db_err.code().as_deref(), Some("22P02") | Some("22003")) =>
        {
            tracing::warn!(error = %db_err, "Rejected non-numeric or out-of-range value");
            (StatusCode::BAD_REQUEST, INVALID_TYPE_MSG.to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MSG.to_string())
        }
    }
}
