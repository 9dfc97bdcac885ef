//! Membership lifecycle handlers.

mod get_membership_status;
mod list_plans;
mod set_user_membership;
mod upsert_plan;

pub use get_membership_status::{
    GetMembershipStatusHandler, GetMembershipStatusQuery, MembershipStatusView,
};
pub use list_plans::{ListPlansHandler, ListPlansQuery};
pub use set_user_membership::{SetUserMembershipCommand, SetUserMembershipHandler};
pub use upsert_plan::{UpsertPlanCommand, UpsertPlanHandler};
