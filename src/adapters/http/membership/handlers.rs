//! HTTP handlers for membership endpoints.

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::application::handlers::membership::{
    GetMembershipStatusQuery, ListPlansQuery, SetUserMembershipCommand, UpsertPlanCommand,
};
use crate::domain::foundation::UserId;

use super::super::error::ApiError;
use super::super::middleware::RequireAdmin;
use super::super::router::AppState;
use super::super::users::UserResponse;
use super::dto::{
    MembershipStatusResponse, PlanResponse, SetMembershipRequest, UpsertPlanRequest,
};

/// GET /api/membership/plans
pub async fn list_plans(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let plans = state.list_plans_handler().handle(ListPlansQuery).await?;
    let response: Vec<PlanResponse> = plans.into_iter().map(PlanResponse::from).collect();
    Ok(Json(response))
}

/// POST /api/membership/plans (admin)
pub async fn upsert_plan(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(request): Json<UpsertPlanRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let plan = state
        .upsert_plan_handler()
        .handle(UpsertPlanCommand {
            plan_type: request.plan_type,
            name: request.name,
            price: request.price,
            duration_months: request.duration,
            features: request.features,
            is_popular: request.is_popular,
            is_active: request.is_active,
        })
        .await?;

    Ok(Json(PlanResponse::from(plan)))
}

/// GET /api/membership/user/:id
pub async fn get_user_membership(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let view = state
        .get_membership_status_handler()
        .handle(GetMembershipStatusQuery {
            user_id: UserId::from_uuid(id),
        })
        .await?;

    Ok(Json(MembershipStatusResponse::from(view)))
}

/// PUT /api/membership/user/:id (admin)
pub async fn set_user_membership(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetMembershipRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let account = state
        .set_user_membership_handler()
        .handle(SetUserMembershipCommand {
            user_id: UserId::from_uuid(id),
            plan: request.membership_plan,
            payment_status: request.payment_status,
            amount: request.payment_amount,
        })
        .await?;

    Ok(Json(UserResponse::from(account)))
}
