//! User account repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{Account, EmailAddress};

/// Persistence for the `Account` aggregate.
///
/// Email is the unique identity key (already normalized by `EmailAddress`).
/// Accounts are never hard-deleted.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account.
    ///
    /// # Errors
    ///
    /// - `EmailTaken` when the email is already registered
    /// - `DatabaseError` on persistence failure
    async fn create(&self, account: &Account) -> Result<(), DomainError>;

    /// Persist all mutable fields of an existing account.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` when the id does not exist
    async fn update(&self, account: &Account) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<Account>, DomainError>;

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, DomainError>;

    /// All accounts, newest first.
    async fn list(&self) -> Result<Vec<Account>, DomainError>;
}
