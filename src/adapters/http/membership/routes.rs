//! Router for /api/membership.

use axum::{routing::get, Router};

use super::super::router::AppState;
use super::handlers::{get_user_membership, list_plans, set_user_membership, upsert_plan};

/// Membership routes.
///
/// - `GET /plans` - active catalog, public
/// - `POST /plans` - catalog upsert, admin
/// - `GET /user/:id` - membership status projection, public
/// - `PUT /user/:id` - record a payment update, admin
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/plans", get(list_plans).post(upsert_plan))
        .route(
            "/user/:id",
            get(get_user_membership).put(set_user_membership),
        )
}
