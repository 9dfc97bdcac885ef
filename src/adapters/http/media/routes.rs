//! Router for /api/media.

use axum::{
    routing::{get, post},
    Router,
};

use super::super::router::AppState;
use super::handlers::{get_media, list_media, upload_media};

/// Media routes.
///
/// - `POST /upload` - accept a file, store it, record metadata
/// - `GET /` - all items, newest first
/// - `GET /:id` - single item's metadata
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_media))
        .route("/", get(list_media))
        .route("/:id", get(get_media))
}
