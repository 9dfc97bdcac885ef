//! Credential issuance and validation port.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Issues and validates signed, time-bounded bearer credentials.
///
/// Credentials are stateless: nothing is persisted server-side, and validity
/// is proven purely by signature and expiry. There is consequently no
/// revocation; an issued credential stays valid until its expiry elapses.
///
/// # Contract
///
/// Implementations must:
/// - Embed the account id, email, and role in the credential
/// - Reject tampered or malformed credentials with `AuthError::InvalidToken`
/// - Reject expired credentials with `AuthError::TokenExpired`
#[async_trait]
pub trait TokenService: Send + Sync {
    /// Mint a credential for an authenticated account.
    async fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError>;

    /// Validate a presented credential and decode the caller it was issued to.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
