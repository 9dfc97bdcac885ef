//! HS256 JWT implementation of the TokenService port.

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

use crate::domain::foundation::{AuthError, AuthenticatedUser, Role, UserId};
use crate::ports::TokenService;

/// Configuration for the JWT token service.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HS256 signing secret.
    secret: Secret<String>,
    /// Credential lifetime.
    pub token_ttl: Duration,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, token_ttl: Duration) -> Self {
        Self {
            secret: Secret::new(secret.into()),
            token_ttl,
        }
    }
}

/// Claims embedded in every issued credential.
///
/// `is_admin` is derived from `role` at issue time so the SPA keeps its
/// boolean view without a second stored source of truth.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    role: String,
    is_admin: bool,
    iat: i64,
    exp: i64,
}

/// Signs and validates stateless HS256 credentials.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
    validation: Validation,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let secret = config.secret.expose_secret().as_bytes();
        let mut validation = Validation::default();
        // No leeway: an expired credential is expired.
        validation.leeway = 0;
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            token_ttl: config.token_ttl,
            validation,
        }
    }
}

#[async_trait]
impl TokenService for JwtTokenService {
    async fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role.to_string(),
            is_admin: user.role.is_admin(),
            iat: now.timestamp(),
            exp: (now + chrono::Duration::seconds(self.token_ttl.as_secs() as i64)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::issuance_failed(e.to_string()))
    }

    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        let id = UserId::from_str(&data.claims.sub).map_err(|_| AuthError::InvalidToken)?;
        let role = Role::from_str(&data.claims.role).map_err(|_| AuthError::InvalidToken)?;
        Ok(AuthenticatedUser::new(id, data.claims.email, role))
    }
}
