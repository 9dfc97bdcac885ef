//! Router for /api/blogpagecontent.

use axum::{routing::get, Router};

use super::super::router::AppState;
use super::handlers::{create_content, get_content, update_content};

/// Page copy routes. Reads are public, writes are admin-gated.
///
/// - `GET /` - latest intro copy
/// - `POST /` - new revision (admin)
/// - `PUT /:id` - edit a revision (admin)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_content).post(create_content))
        .route("/:id", axum::routing::put(update_content))
}
