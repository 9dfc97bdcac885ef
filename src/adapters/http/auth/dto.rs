//! DTOs for authentication endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::auth::{LoginResult, RegisterResult};

/// Request to register a new account.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request to log in.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request to begin a password reset.
#[derive(Debug, Clone, Deserialize)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    pub email: String,
}

/// Request to complete a password reset.
///
/// The SPA sends the code as `otp`; `code` is accepted as an alias.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "code")]
    pub otp: String,
    #[serde(default)]
    pub new_password: String,
}

/// Credential response for register and login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub role: String,
    pub user_id: String,
    pub is_admin: bool,
}

impl From<RegisterResult> for AuthResponse {
    fn from(result: RegisterResult) -> Self {
        Self {
            token: result.token,
            role: result.account.role.to_string(),
            user_id: result.account.id.to_string(),
            is_admin: result.account.is_admin(),
        }
    }
}

impl From<LoginResult> for AuthResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            token: result.token,
            role: result.account.role.to_string(),
            user_id: result.account.id.to_string(),
            is_admin: result.account.is_admin(),
        }
    }
}

/// Plain message body.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_request_accepts_otp_and_code_aliases() {
        let from_otp: ResetPasswordRequest = serde_json::from_str(
            r#"{"email":"a@x.com","otp":"123456","newPassword":"pw"}"#,
        )
        .unwrap();
        assert_eq!(from_otp.otp, "123456");
        assert_eq!(from_otp.new_password, "pw");

        let from_code: ResetPasswordRequest =
            serde_json::from_str(r#"{"email":"a@x.com","code":"654321","newPassword":"pw"}"#)
                .unwrap();
        assert_eq!(from_code.otp, "654321");
    }

    #[test]
    fn auth_response_serializes_camel_case() {
        let response = AuthResponse {
            token: "t".to_string(),
            role: "member".to_string(),
            user_id: "u".to_string(),
            is_admin: false,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("isAdmin").is_some());
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn missing_fields_default_to_empty_for_uniform_validation() {
        let request: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(request.email.is_empty());
        assert!(request.password.is_empty());
    }
}
