//! Outbound notification port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::user::EmailAddress;

/// Dispatches transactional email to an account's registered address.
///
/// Fire-and-wait: no retry policy lives behind this port. Delivery failures
/// surface as `EmailDeliveryFailed`.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send the one-time password-reset code.
    async fn send_password_reset(
        &self,
        to: &EmailAddress,
        code: &str,
    ) -> Result<(), DomainError>;
}
