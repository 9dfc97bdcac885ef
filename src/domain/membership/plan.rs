//! Membership plan catalog entry.

use crate::domain::foundation::{PlanId, Timestamp};

use super::PlanType;

/// A purchasable membership tier as shown on the membership page.
///
/// Catalog entries are keyed by `plan_type`: the bootstrap and the admin
/// catalog endpoint both upsert on that key, so there is never more than one
/// row per tier.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: PlanId,
    pub plan_type: PlanType,
    pub name: String,
    /// Price in whole currency units.
    pub price: i64,
    /// Duration in months; 0 denotes unlimited (lifetime).
    pub duration_months: i32,
    pub features: Vec<String>,
    pub is_popular: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Plan {
    /// Creates a new catalog entry.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        plan_type: PlanType,
        name: impl Into<String>,
        price: i64,
        duration_months: i32,
        features: Vec<String>,
        is_popular: bool,
        is_active: bool,
        now: Timestamp,
    ) -> Self {
        Self {
            id: PlanId::new(),
            plan_type,
            name: name.into(),
            price,
            duration_months,
            features,
            is_popular,
            is_active,
            created_at: now,
            updated_at: now,
        }
    }
}
