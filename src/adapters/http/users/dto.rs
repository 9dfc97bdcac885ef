//! DTOs for user administration endpoints.

use serde::Serialize;

use crate::domain::membership::{PaymentStatus, PlanType};
use crate::domain::user::Account;

/// Account as exposed over the API.
///
/// The stored secret hash is deliberately absent: there is no field for it,
/// so no serializer configuration can leak it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub role: String,
    pub is_admin: bool,
    pub membership_plan: Option<PlanType>,
    pub payment_status: PaymentStatus,
    pub payment_amount: i64,
    pub membership_start_date: Option<String>,
    pub membership_expiry: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Account> for UserResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email.as_str().to_string(),
            role: account.role.to_string(),
            is_admin: account.is_admin(),
            membership_plan: account.membership.plan,
            payment_status: account.membership.payment_status,
            payment_amount: account.membership.amount,
            membership_start_date: account.membership.started_at.map(|t| t.to_rfc3339()),
            membership_expiry: account.membership.expires_at.map(|t| t.to_rfc3339()),
            created_at: account.created_at.to_rfc3339(),
            updated_at: account.updated_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::user::EmailAddress;

    #[test]
    fn response_never_contains_the_password_hash() {
        let account = Account::register(
            EmailAddress::parse("a@x.com").unwrap(),
            "super-secret-hash".to_string(),
            Timestamp::now(),
        );
        let json = serde_json::to_string(&UserResponse::from(account)).unwrap();
        assert!(!json.contains("super-secret-hash"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn response_derives_is_admin_from_role() {
        let mut account = Account::register(
            EmailAddress::parse("a@x.com").unwrap(),
            "h".to_string(),
            Timestamp::now(),
        );
        account.promote(Timestamp::now());

        let response = UserResponse::from(account);
        assert_eq!(response.role, "admin");
        assert!(response.is_admin);
    }
}
