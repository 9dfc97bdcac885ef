//! GetMembershipStatusHandler - read-only membership projection.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::membership::{PaymentStatus, PlanType};
use crate::domain::user::Account;
use crate::ports::UserRepository;

/// Query for an account's membership status.
#[derive(Debug, Clone)]
pub struct GetMembershipStatusQuery {
    pub user_id: UserId,
}

/// Stored membership fields combined with the computed predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipStatusView {
    pub plan: Option<PlanType>,
    pub status: PaymentStatus,
    pub is_active: bool,
    pub expiry: Option<Timestamp>,
    pub start_date: Option<Timestamp>,
    pub amount: i64,
}

impl MembershipStatusView {
    /// Projects an account at an explicit point in time.
    ///
    /// `is_active` is recomputed here on every read; there is no stored
    /// flag to go stale when a dated plan lapses.
    pub fn project(account: &Account, now: Timestamp) -> Self {
        Self {
            plan: account.membership.plan,
            status: account.membership.payment_status,
            is_active: account.membership.is_active(now),
            expiry: account.membership.expires_at,
            start_date: account.membership.started_at,
            amount: account.membership.amount,
        }
    }
}

/// Handler for the membership-status read.
pub struct GetMembershipStatusHandler {
    users: Arc<dyn UserRepository>,
}

impl GetMembershipStatusHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(
        &self,
        query: GetMembershipStatusQuery,
    ) -> Result<MembershipStatusView, DomainError> {
        let Some(account) = self.users.find_by_id(&query.user_id).await? else {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        };
        Ok(MembershipStatusView::project(&account, Timestamp::now()))
    }
}
