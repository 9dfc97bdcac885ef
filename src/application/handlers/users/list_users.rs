//! ListUsersHandler - admin account listing.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::user::Account;
use crate::ports::UserRepository;

/// Query for the admin account listing.
#[derive(Debug, Clone, Default)]
pub struct ListUsersQuery;

/// Handler returning every account.
///
/// The DTO layer strips the password hash before anything leaves the
/// process; this handler returns full aggregates.
pub struct ListUsersHandler {
    users: Arc<dyn UserRepository>,
}

impl ListUsersHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, _query: ListUsersQuery) -> Result<Vec<Account>, DomainError> {
        self.users.list().await
    }
}
