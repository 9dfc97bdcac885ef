//! Router for /api/users.

use axum::{
    routing::{get, put},
    Router,
};

use super::super::router::AppState;
use super::handlers::{demote_user, list_users, promote_user};

/// User administration routes. All admin-gated.
///
/// - `GET /` - list accounts (hash excluded)
/// - `PUT /promote/:id` - grant admin
/// - `PUT /demote/:id` - revoke admin; rejects self-demotion
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/promote/:id", put(promote_user))
        .route("/demote/:id", put(demote_user))
}
