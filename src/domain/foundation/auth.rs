//! Authentication types for the domain layer.
//!
//! These types represent an authenticated caller decoded from a bearer
//! credential. They have no provider dependencies: the JWT adapter populates
//! them via the `TokenService` port, and test doubles can mint them directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::UserId;

/// Privilege classification for an account.
///
/// The single source of truth for privilege. The `is_admin` boolean the SPA
/// expects is derived from this at the boundary, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Admin,
}

impl Role {
    /// Derived boolean view for token claims and DTOs.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Member => write!(f, "member"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member" => Ok(Role::Member),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// Authenticated caller extracted from a validated credential.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The account this credential was issued to.
    pub id: UserId,

    /// Email address embedded at issue time.
    pub email: String,

    /// Privilege classification embedded at issue time.
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Authentication errors that can occur during credential validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The credential is missing, malformed, or has an invalid signature.
    #[error("Invalid token")]
    InvalidToken,

    /// The credential has expired.
    #[error("Token expired")]
    TokenExpired,

    /// Credential issuance failed (signing key problems and the like).
    #[error("Token issuance failed: {0}")]
    IssuanceFailed(String),
}

impl AuthError {
    pub fn issuance_failed(message: impl Into<String>) -> Self {
        Self::IssuanceFailed(message.into())
    }
}

impl From<AuthError> for super::DomainError {
    fn from(err: AuthError) -> Self {
        use super::{DomainError, ErrorCode};
        match err {
            AuthError::InvalidToken | AuthError::TokenExpired => {
                DomainError::new(ErrorCode::Unauthorized, err.to_string())
            }
            AuthError::IssuanceFailed(msg) => DomainError::new(ErrorCode::InternalError, msg),
        }
    }
}
