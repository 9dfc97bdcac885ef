//! Router for /api/youtube.

use axum::{routing::get, Router};

use super::super::router::AppState;
use super::handlers::{create_video, delete_video, list_videos, update_video};

/// Video routes. Listing is public, writes are admin-gated.
///
/// - `GET /` - all videos, newest first
/// - `POST /` - add (admin)
/// - `PUT /:id` - edit (admin)
/// - `DELETE /:id` - remove (admin)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_videos).post(create_video))
        .route("/:id", axum::routing::put(update_video).delete(delete_video))
}
