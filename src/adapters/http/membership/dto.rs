//! DTOs for membership endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::membership::MembershipStatusView;
use crate::domain::membership::{PaymentStatus, Plan, PlanType};

/// Request to create or overwrite a catalog entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertPlanRequest {
    pub plan_type: PlanType,
    pub name: String,
    pub price: i64,
    /// Months; 0 for lifetime.
    pub duration: i32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Catalog entry response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub id: String,
    pub plan_type: PlanType,
    pub name: String,
    pub price: i64,
    pub duration: i32,
    pub features: Vec<String>,
    pub is_popular: bool,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Plan> for PlanResponse {
    fn from(plan: Plan) -> Self {
        Self {
            id: plan.id.to_string(),
            plan_type: plan.plan_type,
            name: plan.name,
            price: plan.price,
            duration: plan.duration_months,
            features: plan.features,
            is_popular: plan.is_popular,
            is_active: plan.is_active,
            created_at: plan.created_at.to_rfc3339(),
            updated_at: plan.updated_at.to_rfc3339(),
        }
    }
}

/// Request to record a payment update against an account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetMembershipRequest {
    #[serde(default)]
    pub membership_plan: Option<PlanType>,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub payment_amount: i64,
}

/// Membership status projection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipStatusResponse {
    pub plan: Option<PlanType>,
    pub status: PaymentStatus,
    pub is_active: bool,
    pub expiry: Option<String>,
    pub start_date: Option<String>,
    pub amount: i64,
}

impl From<MembershipStatusView> for MembershipStatusResponse {
    fn from(view: MembershipStatusView) -> Self {
        Self {
            plan: view.plan,
            status: view.status,
            is_active: view.is_active,
            expiry: view.expiry.map(|t| t.to_rfc3339()),
            start_date: view.start_date.map(|t| t.to_rfc3339()),
            amount: view.amount,
        }
    }
}
