//! PostgreSQL implementation of PlanRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, PlanId, Timestamp};
use crate::domain::membership::{Plan, PlanType};
use crate::ports::{PlanRepository, PlanUpsert};

/// Plan catalog persistence backed by the `membership_plans` table.
pub struct PostgresPlanRepository {
    pool: PgPool,
}

impl PostgresPlanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a catalog entry.
#[derive(Debug, sqlx::FromRow)]
struct PlanRow {
    id: Uuid,
    plan_type: String,
    name: String,
    price: i64,
    duration_months: i32,
    features: Vec<String>,
    is_popular: bool,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PlanRow> for Plan {
    type Error = DomainError;

    fn try_from(row: PlanRow) -> Result<Self, Self::Error> {
        let plan_type = PlanType::from_str(&row.plan_type).map_err(DomainError::database)?;
        Ok(Plan {
            id: PlanId::from_uuid(row.id),
            plan_type,
            name: row.name,
            price: row.price,
            duration_months: row.duration_months,
            features: row.features,
            is_popular: row.is_popular,
            is_active: row.is_active,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

#[async_trait]
impl PlanRepository for PostgresPlanRepository {
    async fn upsert(&self, upsert: PlanUpsert) -> Result<Plan, DomainError> {
        let now = Timestamp::now();
        // Keyed by plan_type: the second upsert for a tier overwrites the
        // first row instead of inserting another.
        let row: PlanRow = sqlx::query_as(
            r#"
            INSERT INTO membership_plans (
                id, plan_type, name, price, duration_months, features,
                is_popular, is_active, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            ON CONFLICT (plan_type) DO UPDATE SET
                name = EXCLUDED.name,
                price = EXCLUDED.price,
                duration_months = EXCLUDED.duration_months,
                features = EXCLUDED.features,
                is_popular = EXCLUDED.is_popular,
                is_active = EXCLUDED.is_active,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(PlanId::new().as_uuid())
        .bind(upsert.plan_type.as_str())
        .bind(&upsert.name)
        .bind(upsert.price)
        .bind(upsert.duration_months)
        .bind(&upsert.features)
        .bind(upsert.is_popular)
        .bind(upsert.is_active)
        .bind(now.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to upsert plan: {}", e)))?;

        Plan::try_from(row)
    }

    async fn list_active(&self) -> Result<Vec<Plan>, DomainError> {
        let rows: Vec<PlanRow> = sqlx::query_as(
            r#"SELECT * FROM membership_plans WHERE is_active ORDER BY price ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list plans: {}", e)))?;

        rows.into_iter().map(Plan::try_from).collect()
    }
}
