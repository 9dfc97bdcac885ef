//! Password hashing port.

use crate::domain::foundation::DomainError;

/// One-way salted password hashing.
///
/// # Contract
///
/// - The hash must be irreversible and never equal the input.
/// - Each call must salt independently: hashing the same secret twice yields
///   two different stored values, both of which verify.
pub trait PasswordHasher: Send + Sync {
    /// Hash a secret for storage.
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a presented secret against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}
