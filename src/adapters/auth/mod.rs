//! Authentication adapters: password hashing and credential signing.

mod argon2_hasher;
mod jwt;
mod mock;

pub use argon2_hasher::Argon2PasswordHasher;
pub use jwt::{JwtConfig, JwtTokenService};
pub use mock::MockTokenService;
