//! HTTP handlers for user administration endpoints.

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::application::handlers::users::{
    DemoteUserCommand, ListUsersQuery, PromoteUserCommand,
};
use crate::domain::foundation::UserId;

use super::super::auth::MessageResponse;
use super::super::error::ApiError;
use super::super::middleware::RequireAdmin;
use super::super::router::AppState;
use super::dto::UserResponse;

/// GET /api/users (admin)
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let accounts = state.list_users_handler().handle(ListUsersQuery).await?;
    let response: Vec<UserResponse> = accounts.into_iter().map(UserResponse::from).collect();
    Ok(Json(response))
}

/// PUT /api/users/promote/:id (admin)
pub async fn promote_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .promote_user_handler()
        .handle(PromoteUserCommand {
            target_id: UserId::from_uuid(id),
        })
        .await?;

    Ok(Json(MessageResponse::new(
        "User promoted to admin successfully",
    )))
}

/// PUT /api/users/demote/:id (admin)
///
/// The caller's own id comes from the verified credential, never from the
/// request body, so the self-demotion guard cannot be spoofed.
pub async fn demote_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .demote_user_handler()
        .handle(DemoteUserCommand {
            caller_id: admin.id,
            target_id: UserId::from_uuid(id),
        })
        .await?;

    Ok(Json(MessageResponse::new(
        "User demoted to member successfully",
    )))
}
