//! HTTP handlers for authentication endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::auth::{
    ForgotPasswordCommand, LoginCommand, RegisterCommand, ResetPasswordCommand,
};

use super::super::error::ApiError;
use super::super::router::AppState;
use super::dto::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest,
    ResetPasswordRequest,
};

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .register_handler()
        .handle(RegisterCommand {
            email: request.email,
            password: request.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AuthResponse::from(result))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .login_handler()
        .handle(LoginCommand {
            email: request.email,
            password: request.password,
        })
        .await?;

    Ok(Json(AuthResponse::from(result)))
}

/// POST /api/auth/forgot-password
///
/// The response body is the same whether or not the address is registered.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .forgot_password_handler()
        .handle(ForgotPasswordCommand {
            email: request.email,
        })
        .await?;

    Ok(Json(MessageResponse::new(
        "If that email is registered, a reset code has been sent",
    )))
}

/// POST /api/auth/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .reset_password_handler()
        .handle(ResetPasswordCommand {
            email: request.email,
            code: request.otp,
            new_password: request.new_password,
        })
        .await?;

    Ok(Json(MessageResponse::new("Password reset successfully")))
}
