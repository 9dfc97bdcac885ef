//! Router for /api/blog.

use axum::{routing::get, Router};

use super::super::router::AppState;
use super::handlers::{create_post, delete_post, get_post, list_posts, update_post};

/// Blog routes. Reads are public, writes are admin-gated.
///
/// - `GET /` - all posts, newest first
/// - `GET /:id` - single post
/// - `POST /` - create (admin, multipart with optional cover image)
/// - `PUT /:id` - update (admin, multipart)
/// - `DELETE /:id` - delete (admin)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/:id", get(get_post).put(update_post).delete(delete_post))
}
