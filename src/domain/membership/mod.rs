//! Membership lifecycle: plan catalog and per-account payment bookkeeping.

mod catalog;
mod payment_status;
mod plan;
mod plan_type;
mod snapshot;

pub use catalog::{default_plans, PlanSeed};
pub use payment_status::PaymentStatus;
pub use plan::Plan;
pub use plan_type::PlanType;
pub use snapshot::MembershipSnapshot;
