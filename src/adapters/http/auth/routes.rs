//! Router for /api/auth.

use axum::{routing::post, Router};

use super::super::router::AppState;
use super::handlers::{forgot_password, login, register, reset_password};

/// Authentication routes. All public: these are how a caller *obtains*
/// a credential.
///
/// - `POST /register`
/// - `POST /login`
/// - `POST /forgot-password`
/// - `POST /reset-password`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/forgot-password", post(forgot_password))
        .route("/reset-password", post(reset_password))
}
