//! DemoteUserHandler - revokes admin privilege.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::UserRepository;

/// Command to demote an account back to member.
#[derive(Debug, Clone)]
pub struct DemoteUserCommand {
    /// The admin making the request.
    pub caller_id: UserId,
    /// The account being demoted.
    pub target_id: UserId,
}

/// Handler for the admin-only demote operation.
///
/// Self-demotion is rejected before any lookup: an instance must not be
/// able to lock its last admin out by accident.
pub struct DemoteUserHandler {
    users: Arc<dyn UserRepository>,
}

impl DemoteUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, command: DemoteUserCommand) -> Result<(), DomainError> {
        if command.caller_id == command.target_id {
            return Err(DomainError::new(
                ErrorCode::SelfDemotion,
                "You cannot demote yourself.",
            ));
        }

        let Some(mut account) = self.users.find_by_id(&command.target_id).await? else {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        };

        account.demote(Timestamp::now());
        self.users.update(&account).await
    }
}
