//! ResetPasswordHandler - completes the password-reset flow.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::user::EmailAddress;
use crate::ports::{PasswordHasher, UserRepository};

/// Command to complete a password reset.
#[derive(Debug, Clone)]
pub struct ResetPasswordCommand {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

/// Handler for the reset-complete step.
///
/// Wrong code, expired code, consumed code, and unknown account all produce
/// the same `invalid or expired code` error. On success the stored hash is
/// replaced and the code cleared so it cannot be replayed.
pub struct ResetPasswordHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl ResetPasswordHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, command: ResetPasswordCommand) -> Result<(), DomainError> {
        if command.new_password.is_empty() {
            return Err(DomainError::validation("newPassword", "Password is required"));
        }
        let Ok(email) = EmailAddress::parse(&command.email) else {
            return Err(DomainError::invalid_reset_code());
        };
        let Some(mut account) = self.users.find_by_email(&email).await? else {
            return Err(DomainError::invalid_reset_code());
        };

        let new_hash = self.hasher.hash(&command.new_password)?;
        if !account.complete_password_reset(&command.code, new_hash, Timestamp::now()) {
            return Err(DomainError::invalid_reset_code());
        }

        self.users.update(&account).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        member_account, InMemoryUserRepository, PlainTextHasher,
    };
    use crate::domain::foundation::ErrorCode;
    use crate::domain::user::ResetCode;

    fn handler(users: Arc<InMemoryUserRepository>) -> ResetPasswordHandler {
        ResetPasswordHandler::new(users, Arc::new(PlainTextHasher))
    }

    fn account_with_code(code: &str) -> crate::domain::user::Account {
        let mut account = member_account("a@x.com", "old");
        account.reset_code = Some(ResetCode::from_parts(
            code,
            Timestamp::now().plus_minutes(10),
        ));
        account
    }

    #[tokio::test]
    async fn valid_code_replaces_password_and_clears_code() {
        let account = account_with_code("123456");
        let id = account.id;
        let users = Arc::new(InMemoryUserRepository::new().with_account(account));

        handler(users.clone())
            .handle(ResetPasswordCommand {
                email: "a@x.com".to_string(),
                code: "123456".to_string(),
                new_password: "brand-new".to_string(),
            })
            .await
            .unwrap();

        let stored = users.get(&id).unwrap();
        assert_eq!(stored.password_hash, "hashed:brand-new");
        assert!(stored.reset_code.is_none());
    }

    #[tokio::test]
    async fn consumed_code_cannot_be_reused() {
        let account = account_with_code("123456");
        let users = Arc::new(InMemoryUserRepository::new().with_account(account));
        let handler = handler(users);

        let command = ResetPasswordCommand {
            email: "a@x.com".to_string(),
            code: "123456".to_string(),
            new_password: "pw2".to_string(),
        };
        handler.handle(command.clone()).await.unwrap();

        // Well inside the 10-minute window, same code: rejected.
        let err = handler.handle(command).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidResetCode);
    }

    #[tokio::test]
    async fn wrong_and_expired_codes_share_one_error() {
        let mut expired = member_account("b@x.com", "old");
        expired.reset_code = Some(ResetCode::from_parts(
            "222222",
            Timestamp::now().plus_minutes(-1),
        ));
        let users = Arc::new(
            InMemoryUserRepository::new()
                .with_account(account_with_code("111111"))
                .with_account(expired),
        );
        let handler = handler(users);

        let wrong = handler
            .handle(ResetPasswordCommand {
                email: "a@x.com".to_string(),
                code: "999999".to_string(),
                new_password: "pw".to_string(),
            })
            .await
            .unwrap_err();
        let stale = handler
            .handle(ResetPasswordCommand {
                email: "b@x.com".to_string(),
                code: "222222".to_string(),
                new_password: "pw".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(wrong.code, ErrorCode::InvalidResetCode);
        assert_eq!(wrong.code, stale.code);
        assert_eq!(wrong.message, stale.message);
    }

    #[tokio::test]
    async fn unknown_account_gets_the_same_error() {
        let users = Arc::new(InMemoryUserRepository::new());
        let err = handler(users)
            .handle(ResetPasswordCommand {
                email: "ghost@x.com".to_string(),
                code: "123456".to_string(),
                new_password: "pw".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidResetCode);
    }

    #[tokio::test]
    async fn empty_new_password_is_a_validation_error() {
        let users = Arc::new(InMemoryUserRepository::new().with_account(account_with_code("1")));
        let err = handler(users)
            .handle(ResetPasswordCommand {
                email: "a@x.com".to_string(),
                code: "1".to_string(),
                new_password: String::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
