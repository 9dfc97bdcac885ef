//! Membership plan catalog repository port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::membership::{Plan, PlanType};

/// Fields written by a catalog upsert; the key is the plan type.
#[derive(Debug, Clone)]
pub struct PlanUpsert {
    pub plan_type: PlanType,
    pub name: String,
    pub price: i64,
    pub duration_months: i32,
    pub features: Vec<String>,
    pub is_popular: bool,
    pub is_active: bool,
}

/// Persistence for the plan catalog.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Create or overwrite the entry for `upsert.plan_type`.
    ///
    /// Idempotent: repeating the same upsert leaves exactly one row per
    /// plan type. Returns the stored entry.
    async fn upsert(&self, upsert: PlanUpsert) -> Result<Plan, DomainError>;

    /// Active plans, ascending by price.
    async fn list_active(&self) -> Result<Vec<Plan>, DomainError>;
}
