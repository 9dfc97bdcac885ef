//! ForgotPasswordHandler - begins the password-reset flow.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::user::EmailAddress;
use crate::ports::{Mailer, UserRepository};

/// Command to request a password-reset code.
#[derive(Debug, Clone)]
pub struct ForgotPasswordCommand {
    pub email: String,
}

/// Handler for the reset-begin step.
///
/// The outcome is identical whether or not the address is registered, so
/// the endpoint cannot be used to enumerate accounts. When the account
/// exists, a 6-digit code with a 10-minute expiry is stored and dispatched.
pub struct ForgotPasswordHandler {
    users: Arc<dyn UserRepository>,
    mailer: Arc<dyn Mailer>,
}

impl ForgotPasswordHandler {
    pub fn new(users: Arc<dyn UserRepository>, mailer: Arc<dyn Mailer>) -> Self {
        Self { users, mailer }
    }

    pub async fn handle(&self, command: ForgotPasswordCommand) -> Result<(), DomainError> {
        // A malformed address can't be registered; answer as if unknown.
        let Ok(email) = EmailAddress::parse(&command.email) else {
            return Ok(());
        };

        let Some(mut account) = self.users.find_by_email(&email).await? else {
            return Ok(());
        };

        let code = account.begin_password_reset(Timestamp::now());
        self.users.update(&account).await?;
        self.mailer
            .send_password_reset(&account.email, code.code())
            .await?;

        Ok(())
    }
}
