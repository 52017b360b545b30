/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted internally. The pool is
/// opened and closed by `main`, never by a handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ncnews_db::DbPool,
}
