//! Email address value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Case-insensitive email identity key.
///
/// Construction normalizes (trim + lowercase) so `A@X.com` and `a@x.com`
/// resolve to the same account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and normalizes an email address.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let normalized = raw.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::validation("email", "Email is required"));
        }
        // Minimal structural check; deliverability is the mailer's problem.
        let mut parts = normalized.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                "Invalid email address",
            ));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
