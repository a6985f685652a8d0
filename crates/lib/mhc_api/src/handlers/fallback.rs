//! Catch-all for unrouted paths.

use axum::http::Uri;
use tracing::debug;

use crate::error::AppError;

/// Any path no route matched — JSON 404 instead of an empty body.
pub async fn not_found_handler(uri: Uri) -> AppError {
    debug!(%uri, "no route");
    AppError::NotFound("Not found".into())
}
