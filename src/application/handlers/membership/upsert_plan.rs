//! UpsertPlanHandler - admin catalog writes.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::membership::{Plan, PlanType};
use crate::ports::{PlanRepository, PlanUpsert};

/// Command to create or overwrite a catalog entry.
#[derive(Debug, Clone)]
pub struct UpsertPlanCommand {
    pub plan_type: PlanType,
    pub name: String,
    pub price: i64,
    pub duration_months: i32,
    pub features: Vec<String>,
    pub is_popular: bool,
    pub is_active: bool,
}

/// Handler for the admin-only catalog upsert, keyed by plan type.
pub struct UpsertPlanHandler {
    plans: Arc<dyn PlanRepository>,
}

impl UpsertPlanHandler {
    pub fn new(plans: Arc<dyn PlanRepository>) -> Self {
        Self { plans }
    }

    pub async fn handle(&self, command: UpsertPlanCommand) -> Result<Plan, DomainError> {
        if command.name.trim().is_empty() {
            return Err(DomainError::validation("name", "Name is required"));
        }
        if command.price < 0 {
            return Err(DomainError::validation("price", "Price cannot be negative"));
        }
        if command.duration_months < 0 {
            return Err(DomainError::validation(
                "duration",
                "Duration cannot be negative",
            ));
        }

        self.plans
            .upsert(PlanUpsert {
                plan_type: command.plan_type,
                name: command.name,
                price: command.price,
                duration_months: command.duration_months,
                features: command.features,
                is_popular: command.is_popular,
                is_active: command.is_active,
            })
            .await
    }
}
