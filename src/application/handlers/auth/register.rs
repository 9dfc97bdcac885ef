//! RegisterHandler - creates an account and logs it in.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, DomainError, Timestamp};
use crate::domain::user::{Account, EmailAddress};
use crate::ports::{PasswordHasher, TokenService, UserRepository};

/// Command to register a new account.
#[derive(Debug, Clone)]
pub struct RegisterCommand {
    pub email: String,
    pub password: String,
}

/// A freshly created, already-logged-in account.
#[derive(Debug, Clone)]
pub struct RegisterResult {
    pub account: Account,
    pub token: String,
}

/// Handler for account registration.
///
/// New accounts start at the lowest privilege. The secret is hashed before
/// it ever reaches the repository, and registration issues a credential
/// immediately so the SPA can skip a second login round-trip.
pub struct RegisterHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl RegisterHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    pub async fn handle(&self, command: RegisterCommand) -> Result<RegisterResult, DomainError> {
        if command.password.is_empty() {
            return Err(DomainError::validation("password", "Password is required"));
        }
        let email = EmailAddress::parse(&command.email)?;

        let password_hash = self.hasher.hash(&command.password)?;
        let account = Account::register(email, password_hash, Timestamp::now());

        // The unique index is the real duplicate gate; this insert surfaces
        // EmailTaken for a lost race as well as for the common case.
        self.users.create(&account).await?;

        let token = self
            .tokens
            .issue(&AuthenticatedUser::new(
                account.id,
                account.email.as_str(),
                account.role,
            ))
            .await?;

        Ok(RegisterResult { account, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockTokenService;
    use crate::application::handlers::test_support::{
        member_account, InMemoryUserRepository, PlainTextHasher,
    };
    use crate::domain::foundation::{ErrorCode, Role};

    fn handler(users: Arc<InMemoryUserRepository>) -> RegisterHandler {
        RegisterHandler::new(users, Arc::new(PlainTextHasher), Arc::new(MockTokenService::new()))
    }

    #[tokio::test]
    async fn registers_member_with_hashed_secret() {
        let users = Arc::new(InMemoryUserRepository::new());
        let result = handler(users.clone())
            .handle(RegisterCommand {
                email: "a@x.com".to_string(),
                password: "pw1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.account.role, Role::Member);
        assert_ne!(result.account.password_hash, "pw1");
        assert!(!result.token.is_empty());
        assert!(users.get(&result.account.id).is_some());
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let users =
            Arc::new(InMemoryUserRepository::new().with_account(member_account("a@x.com", "pw")));
        let err = handler(users)
            .handle(RegisterCommand {
                email: "a@x.com".to_string(),
                password: "pw2".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EmailTaken);
    }

    #[tokio::test]
    async fn duplicate_check_is_case_insensitive() {
        let users =
            Arc::new(InMemoryUserRepository::new().with_account(member_account("a@x.com", "pw")));
        let err = handler(users)
            .handle(RegisterCommand {
                email: "A@X.com".to_string(),
                password: "pw2".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EmailTaken);
    }

    #[tokio::test]
    async fn missing_fields_are_validation_errors() {
        let users = Arc::new(InMemoryUserRepository::new());

        let err = handler(users.clone())
            .handle(RegisterCommand {
                email: "a@x.com".to_string(),
                password: String::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let err = handler(users)
            .handle(RegisterCommand {
                email: String::new(),
                password: "pw".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
