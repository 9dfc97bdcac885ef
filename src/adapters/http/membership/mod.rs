//! Membership endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{MembershipStatusResponse, PlanResponse, SetMembershipRequest, UpsertPlanRequest};
pub use routes::routes;
