//! Mock token service for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::TokenService;

/// In-memory token service: issues predictable tokens and validates only
/// what was registered or issued through it.
#[derive(Default)]
pub struct MockTokenService {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
}

impl MockTokenService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token as valid for the given user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.write().unwrap().insert(token.into(), user);
        self
    }
}

#[async_trait]
impl TokenService for MockTokenService {
    async fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError> {
        let token = format!("mock-token-{}", self.tokens.read().unwrap().len());
        self.tokens
            .write()
            .unwrap()
            .insert(token.clone(), user.clone());
        Ok(token)
    }

    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.tokens
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Role, UserId};

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(), "test@example.com", Role::Member)
    }

    #[tokio::test]
    async fn issued_tokens_validate() {
        let service = MockTokenService::new();
        let user = test_user();
        let token = service.issue(&user).await.unwrap();
        let decoded = service.validate(&token).await.unwrap();
        assert_eq!(decoded.id, user.id);
    }

    #[tokio::test]
    async fn registered_tokens_validate() {
        let user = test_user();
        let service = MockTokenService::new().with_user("known", user.clone());
        assert_eq!(service.validate("known").await.unwrap().id, user.id);
    }

    #[tokio::test]
    async fn unknown_tokens_are_rejected() {
        let service = MockTokenService::new();
        assert!(matches!(
            service.validate("unknown").await,
            Err(AuthError::InvalidToken)
        ));
    }
}
