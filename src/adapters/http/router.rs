//! Top-level API router and shared application state.

use std::sync::Arc;

use axum::{middleware, routing::get, Json, Router};

use crate::application::handlers::auth::{
    ForgotPasswordHandler, LoginHandler, RegisterHandler, ResetPasswordHandler,
};
use crate::application::handlers::membership::{
    GetMembershipStatusHandler, ListPlansHandler, SetUserMembershipHandler, UpsertPlanHandler,
};
use crate::application::handlers::users::{DemoteUserHandler, ListUsersHandler, PromoteUserHandler};
use crate::ports::{
    BlogRepository, FileStorage, Mailer, MediaRepository, PageContentRepository, PasswordHasher,
    PlanRepository, TokenService, UserRepository, VideoRepository,
};

use super::middleware::auth_middleware;
use super::{auth, blog, media, membership, pages, users, videos};

/// Shared application state: one Arc-wrapped handle per port.
///
/// Cloned per request; handlers are constructed on demand from these.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub plans: Arc<dyn PlanRepository>,
    pub blog: Arc<dyn BlogRepository>,
    pub media: Arc<dyn MediaRepository>,
    pub videos: Arc<dyn VideoRepository>,
    pub pages: Arc<dyn PageContentRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenService>,
    pub mailer: Arc<dyn Mailer>,
    pub storage: Arc<dyn FileStorage>,
}

impl AppState {
    pub fn register_handler(&self) -> RegisterHandler {
        RegisterHandler::new(self.users.clone(), self.hasher.clone(), self.tokens.clone())
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(self.users.clone(), self.hasher.clone(), self.tokens.clone())
    }

    pub fn forgot_password_handler(&self) -> ForgotPasswordHandler {
        ForgotPasswordHandler::new(self.users.clone(), self.mailer.clone())
    }

    pub fn reset_password_handler(&self) -> ResetPasswordHandler {
        ResetPasswordHandler::new(self.users.clone(), self.hasher.clone())
    }

    pub fn list_plans_handler(&self) -> ListPlansHandler {
        ListPlansHandler::new(self.plans.clone())
    }

    pub fn upsert_plan_handler(&self) -> UpsertPlanHandler {
        UpsertPlanHandler::new(self.plans.clone())
    }

    pub fn set_user_membership_handler(&self) -> SetUserMembershipHandler {
        SetUserMembershipHandler::new(self.users.clone())
    }

    pub fn get_membership_status_handler(&self) -> GetMembershipStatusHandler {
        GetMembershipStatusHandler::new(self.users.clone())
    }

    pub fn list_users_handler(&self) -> ListUsersHandler {
        ListUsersHandler::new(self.users.clone())
    }

    pub fn promote_user_handler(&self) -> PromoteUserHandler {
        PromoteUserHandler::new(self.users.clone())
    }

    pub fn demote_user_handler(&self) -> DemoteUserHandler {
        DemoteUserHandler::new(self.users.clone())
    }
}

/// Health probe, also used by the SPA's connectivity check.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Builds the `/api` router with the auth middleware applied.
pub fn api_router(state: AppState) -> Router {
    let tokens = state.tokens.clone();

    let api = Router::new()
        .route("/health", get(health))
        .nest("/auth", auth::routes())
        .nest("/membership", membership::routes())
        .nest("/users", users::routes())
        .nest("/blog", blog::routes())
        .nest("/media", media::routes())
        .nest("/youtube", videos::routes())
        .nest("/blogpagecontent", pages::routes())
        .layer(middleware::from_fn_with_state(tokens, auth_middleware))
        .with_state(state);

    Router::new().nest("/api", api)
}
