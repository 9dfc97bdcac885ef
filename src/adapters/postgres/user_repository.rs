//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, Role, Timestamp, UserId};
use crate::domain::membership::{MembershipSnapshot, PaymentStatus, PlanType};
use crate::domain::user::{Account, EmailAddress, ResetCode};
use crate::ports::UserRepository;

/// Account persistence backed by the `users` table.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an account.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    email: String,
    password_hash: String,
    role: String,
    membership_plan: Option<String>,
    payment_status: String,
    payment_amount: i64,
    membership_start: Option<DateTime<Utc>>,
    membership_expiry: Option<DateTime<Utc>>,
    reset_code: Option<String>,
    reset_code_expires: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = DomainError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let email = EmailAddress::parse(&row.email)
            .map_err(|e| DomainError::database(format!("Invalid stored email: {}", e)))?;
        let role = Role::from_str(&row.role).map_err(DomainError::database)?;
        let payment_status =
            PaymentStatus::from_str(&row.payment_status).map_err(DomainError::database)?;
        let plan = row
            .membership_plan
            .as_deref()
            .map(PlanType::from_str)
            .transpose()
            .map_err(DomainError::database)?;

        // Both reset columns are written together; treat a half-present pair
        // as no code in flight.
        let reset_code = match (row.reset_code, row.reset_code_expires) {
            (Some(code), Some(expires)) => {
                Some(ResetCode::from_parts(code, Timestamp::from_datetime(expires)))
            }
            _ => None,
        };

        Ok(Account {
            id: UserId::from_uuid(row.id),
            email,
            password_hash: row.password_hash,
            role,
            membership: MembershipSnapshot {
                plan,
                payment_status,
                amount: row.payment_amount,
                started_at: row.membership_start.map(Timestamp::from_datetime),
                expires_at: row.membership_expiry.map(Timestamp::from_datetime),
            },
            reset_code,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, account: &Account) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id, email, password_hash, role, membership_plan, payment_status,
                payment_amount, membership_start, membership_expiry,
                reset_code, reset_code_expires, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(account.id.as_uuid())
        .bind(account.email.as_str())
        .bind(&account.password_hash)
        .bind(account.role.to_string())
        .bind(account.membership.plan.map(|p| p.as_str()))
        .bind(account.membership.payment_status.as_str())
        .bind(account.membership.amount)
        .bind(account.membership.started_at.map(|t| *t.as_datetime()))
        .bind(account.membership.expires_at.map(|t| *t.as_datetime()))
        .bind(account.reset_code.as_ref().map(|c| c.code().to_string()))
        .bind(
            account
                .reset_code
                .as_ref()
                .map(|c| *c.expires_at().as_datetime()),
        )
        .bind(account.created_at.as_datetime())
        .bind(account.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("users_email_key") {
                    return DomainError::new(ErrorCode::EmailTaken, "User already exists");
                }
            }
            DomainError::database(format!("Failed to create account: {}", e))
        })?;

        Ok(())
    }

    async fn update(&self, account: &Account) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                password_hash = $2,
                role = $3,
                membership_plan = $4,
                payment_status = $5,
                payment_amount = $6,
                membership_start = $7,
                membership_expiry = $8,
                reset_code = $9,
                reset_code_expires = $10,
                updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(account.id.as_uuid())
        .bind(&account.password_hash)
        .bind(account.role.to_string())
        .bind(account.membership.plan.map(|p| p.as_str()))
        .bind(account.membership.payment_status.as_str())
        .bind(account.membership.amount)
        .bind(account.membership.started_at.map(|t| *t.as_datetime()))
        .bind(account.membership.expires_at.map(|t| *t.as_datetime()))
        .bind(account.reset_code.as_ref().map(|c| c.code().to_string()))
        .bind(
            account
                .reset_code
                .as_ref()
                .map(|c| *c.expires_at().as_datetime()),
        )
        .bind(account.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update account: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<Account>, DomainError> {
        let row: Option<AccountRow> = sqlx::query_as(
            r#"SELECT * FROM users WHERE id = $1"#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load account: {}", e)))?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, DomainError> {
        let row: Option<AccountRow> = sqlx::query_as(
            r#"SELECT * FROM users WHERE email = $1"#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load account: {}", e)))?;

        row.map(Account::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Account>, DomainError> {
        let rows: Vec<AccountRow> = sqlx::query_as(
            r#"SELECT * FROM users ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list accounts: {}", e)))?;

        rows.into_iter().map(Account::try_from).collect()
    }
}
