//! LoginHandler - verifies a secret and mints a credential.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, DomainError};
use crate::domain::user::{Account, EmailAddress};
use crate::ports::{PasswordHasher, TokenService, UserRepository};

/// Command to log in with email and password.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// A successful login: the account and its bearer credential.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub account: Account,
    pub token: String,
}

/// Handler for password login.
///
/// Unknown email and wrong password produce the same error, so a caller
/// cannot probe which addresses are registered.
pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl LoginHandler {
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

    pub async fn handle(&self, command: LoginCommand) -> Result<LoginResult, DomainError> {
        let Ok(email) = EmailAddress::parse(&command.email) else {
            return Err(DomainError::invalid_credentials());
        };

        let Some(account) = self.users.find_by_email(&email).await? else {
            return Err(DomainError::invalid_credentials());
        };

        if !self.hasher.verify(&command.password, &account.password_hash)? {
            return Err(DomainError::invalid_credentials());
        }

        let token = self
            .tokens
            .issue(&AuthenticatedUser::new(
                account.id,
                account.email.as_str(),
                account.role,
            ))
            .await?;

        Ok(LoginResult { account, token })
    }
}
