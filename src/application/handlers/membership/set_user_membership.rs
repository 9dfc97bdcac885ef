//! SetUserMembershipHandler - admin payment bookkeeping.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::membership::{PaymentStatus, PlanType};
use crate::domain::user::Account;
use crate::ports::UserRepository;

/// Command to overwrite an account's membership triple.
#[derive(Debug, Clone)]
pub struct SetUserMembershipCommand {
    pub user_id: UserId,
    pub plan: Option<PlanType>,
    pub payment_status: PaymentStatus,
    pub amount: i64,
}

/// Handler for the admin membership write.
///
/// A `completed` status stamps the start date and computes expiry from the
/// plan duration (lifetime clears it). Other statuses only record the
/// triple; dates from a previously completed period stay untouched.
pub struct SetUserMembershipHandler {
    users: Arc<dyn UserRepository>,
}

impl SetUserMembershipHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, command: SetUserMembershipCommand) -> Result<Account, DomainError> {
        let Some(mut account) = self.users.find_by_id(&command.user_id).await? else {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        };

        account.set_membership(
            command.plan,
            command.payment_status,
            command.amount,
            Timestamp::now(),
        );
        self.users.update(&account).await?;

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{member_account, InMemoryUserRepository};

    #[tokio::test]
    async fn completed_payment_activates_membership() {
        let account = member_account("a@x.com", "pw");
        let id = account.id;
        let users = Arc::new(InMemoryUserRepository::new().with_account(account));

        let updated = SetUserMembershipHandler::new(users.clone())
            .handle(SetUserMembershipCommand {
                user_id: id,
                plan: Some(PlanType::SixMonth),
                payment_status: PaymentStatus::Completed,
                amount: 6000,
            })
            .await
            .unwrap();

        let now = Timestamp::now();
        assert!(updated.membership.is_active(now));
        assert!(updated.membership.started_at.is_some());
        assert_eq!(
            updated.membership.expires_at,
            updated.membership.started_at.map(|t| t.plus_months(6))
        );
        assert!(users.get(&id).unwrap().membership.is_active(now));
    }

    #[tokio::test]
    async fn lifetime_completion_clears_expiry() {
        let account = member_account("a@x.com", "pw");
        let id = account.id;
        let users = Arc::new(InMemoryUserRepository::new().with_account(account));

        let updated = SetUserMembershipHandler::new(users)
            .handle(SetUserMembershipCommand {
                user_id: id,
                plan: Some(PlanType::Lifetime),
                payment_status: PaymentStatus::Completed,
                amount: 110000,
            })
            .await
            .unwrap();

        assert!(updated.membership.expires_at.is_none());
        assert!(updated.membership.is_active(Timestamp::now()));
    }

    #[tokio::test]
    async fn pending_payment_records_triple_without_dates() {
        let account = member_account("a@x.com", "pw");
        let id = account.id;
        let users = Arc::new(InMemoryUserRepository::new().with_account(account));

        let updated = SetUserMembershipHandler::new(users)
            .handle(SetUserMembershipCommand {
                user_id: id,
                plan: Some(PlanType::OneYear),
                payment_status: PaymentStatus::Pending,
                amount: 11000,
            })
            .await
            .unwrap();

        assert_eq!(updated.membership.plan, Some(PlanType::OneYear));
        assert!(updated.membership.started_at.is_none());
        assert!(!updated.membership.is_active(Timestamp::now()));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let users = Arc::new(InMemoryUserRepository::new());
        let err = SetUserMembershipHandler::new(users)
            .handle(SetUserMembershipCommand {
                user_id: UserId::new(),
                plan: None,
                payment_status: PaymentStatus::Pending,
                amount: 0,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::UserNotFound);
    }
}
