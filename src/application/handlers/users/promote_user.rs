//! PromoteUserHandler - grants admin privilege.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::UserRepository;

/// Command to promote an account to admin.
#[derive(Debug, Clone)]
pub struct PromoteUserCommand {
    pub target_id: UserId,
}

/// Handler for the admin-only promote operation.
pub struct PromoteUserHandler {
    users: Arc<dyn UserRepository>,
}

impl PromoteUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, command: PromoteUserCommand) -> Result<(), DomainError> {
        let Some(mut account) = self.users.find_by_id(&command.target_id).await? else {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        };

        account.promote(Timestamp::now());
        self.users.update(&account).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{member_account, InMemoryUserRepository};
    use crate::domain::foundation::Role;

    #[tokio::test]
    async fn promotes_member_to_admin() {
        let account = member_account("a@x.com", "pw");
        let id = account.id;
        let users = Arc::new(InMemoryUserRepository::new().with_account(account));

        PromoteUserHandler::new(users.clone())
            .handle(PromoteUserCommand { target_id: id })
            .await
            .unwrap();

        assert_eq!(users.get(&id).unwrap().role, Role::Admin);
    }

    #[tokio::test]
    async fn promoting_an_admin_is_a_no_op_write() {
        let mut account = member_account("a@x.com", "pw");
        account.promote(Timestamp::now());
        let id = account.id;
        let users = Arc::new(InMemoryUserRepository::new().with_account(account));

        PromoteUserHandler::new(users.clone())
            .handle(PromoteUserCommand { target_id: id })
            .await
            .unwrap();

        assert_eq!(users.get(&id).unwrap().role, Role::Admin);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let users = Arc::new(InMemoryUserRepository::new());
        let err = PromoteUserHandler::new(users)
            .handle(PromoteUserCommand {
                target_id: UserId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UserNotFound);
    }
}
