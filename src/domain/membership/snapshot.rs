//! Per-account membership state and the activation predicate.

use crate::domain::foundation::Timestamp;

use super::{PaymentStatus, PlanType};

/// Immutable view of an account's membership fields.
///
/// `is_active` is a pure function of this snapshot plus an explicit `now`;
/// it is never stored, because a dated membership flips to inactive by the
/// passage of time alone, with no write occurring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MembershipSnapshot {
    pub plan: Option<PlanType>,
    pub payment_status: PaymentStatus,
    /// Amount paid, in whole currency units.
    pub amount: i64,
    pub started_at: Option<Timestamp>,
    pub expires_at: Option<Timestamp>,
}

impl MembershipSnapshot {
    /// Whether this membership grants access at `now`.
    ///
    /// Lifetime: active iff payment completed, expiry irrelevant.
    /// Dated: active iff payment completed, both dates present, and
    /// `now` is not past expiry. Anything else is inactive.
    pub fn is_active(&self, now: Timestamp) -> bool {
        match self.plan {
            Some(PlanType::Lifetime) => self.payment_status == PaymentStatus::Completed,
            Some(_) => {
                let (Some(_), Some(expiry)) = (self.started_at, self.expires_at) else {
                    return false;
                };
                self.payment_status == PaymentStatus::Completed && !now.is_after(&expiry)
            }
            None => false,
        }
    }

    /// Records an admin-entered payment update.
    ///
    /// Overwrites the (plan, status, amount) triple. Only a `Completed`
    /// status touches the dates: start becomes `now`, expiry becomes
    /// start + duration, or is cleared for lifetime plans. A pending or
    /// failed status leaves any previously earned period intact.
    pub fn record_payment(
        &mut self,
        plan: Option<PlanType>,
        status: PaymentStatus,
        amount: i64,
        now: Timestamp,
    ) {
        self.plan = plan;
        self.payment_status = status;
        self.amount = amount;

        if status == PaymentStatus::Completed {
            self.started_at = Some(now);
            self.expires_at = match plan.and_then(|p| p.duration_months()) {
                Some(months) => Some(now.plus_months(months)),
                None => None,
            };
        }
    }
}
