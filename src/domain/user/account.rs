//! User account aggregate.

use crate::domain::foundation::{Role, Timestamp, UserId};
use crate::domain::membership::{MembershipSnapshot, PaymentStatus, PlanType};

use super::{EmailAddress, ResetCode};

/// A registered user: identity, stored secret hash, privilege, and
/// membership bookkeeping.
///
/// The secret exists only as a salted one-way hash; exactly one hash is
/// stored per account, replaced wholesale on password reset.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
    pub membership: MembershipSnapshot,
    /// Present only while a password-reset flow is in flight.
    pub reset_code: Option<ResetCode>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Account {
    /// Creates a new account at the lowest privilege with no membership.
    pub fn register(email: EmailAddress, password_hash: String, now: Timestamp) -> Self {
        Self {
            id: UserId::new(),
            email,
            password_hash,
            role: Role::Member,
            membership: MembershipSnapshot::default(),
            reset_code: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Grants admin privilege.
    pub fn promote(&mut self, now: Timestamp) {
        self.role = Role::Admin;
        self.updated_at = now;
    }

    /// Revokes admin privilege.
    pub fn demote(&mut self, now: Timestamp) {
        self.role = Role::Member;
        self.updated_at = now;
    }

    /// Starts a password-reset flow, replacing any code already in flight.
    pub fn begin_password_reset(&mut self, now: Timestamp) -> ResetCode {
        let code = ResetCode::generate(now);
        self.reset_code = Some(code.clone());
        self.updated_at = now;
        code
    }

    /// Completes a password reset if `code` matches and is unexpired.
    ///
    /// On success the stored hash is replaced and the code is cleared so it
    /// cannot be replayed. Returns false without touching anything otherwise.
    pub fn complete_password_reset(
        &mut self,
        code: &str,
        new_password_hash: String,
        now: Timestamp,
    ) -> bool {
        let Some(stored) = &self.reset_code else {
            return false;
        };
        if !stored.matches(code, now) {
            return false;
        }
        self.password_hash = new_password_hash;
        self.reset_code = None;
        self.updated_at = now;
        true
    }

    /// Applies an admin membership update. See
    /// [`MembershipSnapshot::record_payment`].
    pub fn set_membership(
        &mut self,
        plan: Option<PlanType>,
        status: PaymentStatus,
        amount: i64,
        now: Timestamp,
    ) {
        self.membership.record_payment(plan, status, amount, now);
        self.updated_at = now;
    }
}
