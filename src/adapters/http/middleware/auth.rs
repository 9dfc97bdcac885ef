//! Authentication middleware and extractors for axum.
//!
//! The role-gate contract:
//! - `auth_middleware` validates the `Authorization: Bearer` credential and
//!   injects the decoded caller into request extensions; an invalid or
//!   expired credential short-circuits with 401, a missing one passes
//!   through for public routes.
//! - `RequireAuth` rejects with 401 when no caller was injected.
//! - `RequireAdmin` additionally rejects with 403 when the caller's
//!   privilege is insufficient - distinct from 401 so a member can tell
//!   "log in" apart from "you are not allowed".
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth / RequireAdmin
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::TokenService;

use super::super::error::ErrorResponse;

/// Auth middleware state - the token service behind the gate.
pub type AuthState = Arc<dyn TokenService>;

/// Validates Bearer credentials and attaches the caller to the request.
pub async fn auth_middleware(
    State(tokens): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match tokens.validate(token).await {
            Ok(user) => {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
            Err(e) => {
                let message = match &e {
                    AuthError::TokenExpired => "Token expired",
                    _ => "Invalid token",
                };
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse::new("AUTH_ERROR", message)),
                )
                    .into_response()
            }
        },
        None => {
            // No credential: public routes proceed, gated handlers enforce
            // via the extractors.
            next.run(request).await
        }
    }
}

/// Extractor that requires an authenticated caller.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Extractor that requires an authenticated admin.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user = parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .ok_or(AuthRejection::Unauthenticated)?;
            if !user.is_admin() {
                return Err(AuthRejection::Forbidden);
            }
            Ok(RequireAdmin(user))
        })
    }
}

/// Rejection type for the auth extractors.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid credential was presented.
    Unauthenticated,
    /// Valid credential, insufficient privilege.
    Forbidden,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AuthRejection::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                "Authentication required",
            ),
            AuthRejection::Forbidden => {
                (StatusCode::FORBIDDEN, "FORBIDDEN", "Admin access required")
            }
        };

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}
