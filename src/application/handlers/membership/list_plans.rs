//! ListPlansHandler - public plan catalog listing.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::membership::Plan;
use crate::ports::PlanRepository;

/// Query for the public plan listing.
#[derive(Debug, Clone, Default)]
pub struct ListPlansQuery;

/// Handler returning active plans, cheapest first.
pub struct ListPlansHandler {
    plans: Arc<dyn PlanRepository>,
}

impl ListPlansHandler {
    pub fn new(plans: Arc<dyn PlanRepository>) -> Self {
        Self { plans }
    }

    pub async fn handle(&self, _query: ListPlansQuery) -> Result<Vec<Plan>, DomainError> {
        self.plans.list_active().await
    }
}
