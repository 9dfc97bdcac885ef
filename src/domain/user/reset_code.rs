//! One-time password-reset code.

use rand::Rng;
use subtle::ConstantTimeEq;

use crate::domain::foundation::Timestamp;

/// Validity window for a reset code.
const RESET_CODE_TTL_MINUTES: i64 = 10;

/// A 6-digit one-time code with its expiry.
///
/// Lives on the account only while a reset flow is in flight; consumed codes
/// are cleared so they cannot be replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetCode {
    code: String,
    expires_at: Timestamp,
}

impl ResetCode {
    /// Generates a fresh random code expiring 10 minutes from `now`.
    pub fn generate(now: Timestamp) -> Self {
        let code = format!("{:06}", rand::thread_rng().gen_range(0..1_000_000u32));
        Self {
            code,
            expires_at: now.plus_minutes(RESET_CODE_TTL_MINUTES),
        }
    }

    /// Reconstructs a stored code (persistence layer only).
    pub fn from_parts(code: impl Into<String>, expires_at: Timestamp) -> Self {
        Self {
            code: code.into(),
            expires_at,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn expires_at(&self) -> Timestamp {
        self.expires_at
    }

    /// Checks a presented code.
    ///
    /// Comparison is constant-time, and an expired code never matches. The
    /// caller cannot tell which of the two checks failed.
    pub fn matches(&self, presented: &str, now: Timestamp) -> bool {
        let unexpired = !now.is_after(&self.expires_at);
        let equal: bool = self
            .code
            .as_bytes()
            .ct_eq(presented.as_bytes())
            .into();
        unexpired && equal
    }
}
