//! Shared in-memory port doubles for handler tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::membership::Plan;
use crate::domain::user::{Account, EmailAddress};
use crate::ports::{PasswordHasher, PlanRepository, PlanUpsert, UserRepository};

/// In-memory UserRepository mirroring the unique-email semantics of the
/// real table.
#[derive(Default)]
pub struct InMemoryUserRepository {
    accounts: Mutex<Vec<Account>>,
    fail: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(self, account: Account) -> Self {
        self.accounts.lock().unwrap().push(account);
        self
    }

    pub fn failing() -> Self {
        Self {
            accounts: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn get(&self, id: &UserId) -> Option<Account> {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.id == id)
            .cloned()
    }

    fn check_fail(&self) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::database("Simulated failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, account: &Account) -> Result<(), DomainError> {
        self.check_fail()?;
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(DomainError::new(ErrorCode::EmailTaken, "User already exists"));
        }
        accounts.push(account.clone());
        Ok(())
    }

    async fn update(&self, account: &Account) -> Result<(), DomainError> {
        self.check_fail()?;
        let mut accounts = self.accounts.lock().unwrap();
        let Some(pos) = accounts.iter().position(|a| a.id == account.id) else {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        };
        accounts[pos] = account.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<Account>, DomainError> {
        self.check_fail()?;
        Ok(self.get(id))
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, DomainError> {
        self.check_fail()?;
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.email == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Account>, DomainError> {
        self.check_fail()?;
        Ok(self.accounts.lock().unwrap().clone())
    }
}

/// In-memory PlanRepository keyed by plan type, like the real table.
#[derive(Default)]
pub struct InMemoryPlanRepository {
    plans: Mutex<Vec<Plan>>,
}

impl InMemoryPlanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.plans.lock().unwrap().len()
    }
}

#[async_trait]
impl PlanRepository for InMemoryPlanRepository {
    async fn upsert(&self, upsert: PlanUpsert) -> Result<Plan, DomainError> {
        let mut plans = self.plans.lock().unwrap();
        let now = Timestamp::now();
        if let Some(existing) = plans.iter_mut().find(|p| p.plan_type == upsert.plan_type) {
            existing.name = upsert.name;
            existing.price = upsert.price;
            existing.duration_months = upsert.duration_months;
            existing.features = upsert.features;
            existing.is_popular = upsert.is_popular;
            existing.is_active = upsert.is_active;
            existing.updated_at = now;
            return Ok(existing.clone());
        }
        let plan = Plan::new(
            upsert.plan_type,
            upsert.name,
            upsert.price,
            upsert.duration_months,
            upsert.features,
            upsert.is_popular,
            upsert.is_active,
            now,
        );
        plans.push(plan.clone());
        Ok(plan)
    }

    async fn list_active(&self) -> Result<Vec<Plan>, DomainError> {
        let mut active: Vec<Plan> = self
            .plans
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_active)
            .cloned()
            .collect();
        active.sort_by_key(|p| p.price);
        Ok(active)
    }
}

/// Transparent "hasher" so tests can read stored values; real hashing is
/// covered by the argon2 adapter's own tests.
pub struct PlainTextHasher;

impl PasswordHasher for PlainTextHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(format!("hashed:{}", password))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

/// Builds a member account with the given email and password.
pub fn member_account(email: &str, password: &str) -> Account {
    Account::register(
        EmailAddress::parse(email).unwrap(),
        format!("hashed:{}", password),
        Timestamp::now(),
    )
}
