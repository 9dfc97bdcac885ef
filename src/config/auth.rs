//! Authentication configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Default credential lifetime: 24 hours.
///
/// One fixed value, configurable per deployment; see DESIGN.md.
fn default_token_ttl() -> u64 {
    86_400
}

/// Authentication configuration (JWT signing)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: Secret<String>,

    /// Credential lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

impl AuthConfig {
    /// Get token TTL as Duration
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jwt_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("JWT_SECRET"));
        }
        if self.token_ttl_secs == 0 {
            return Err(ValidationError::InvalidTokenTtl);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: Secret::new(String::new()),
            token_ttl_secs: default_token_ttl(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_one_day() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl(), Duration::from_secs(86_400));
    }

    #[test]
    fn test_validation_requires_secret() {
        let config = AuthConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("JWT_SECRET"))
        ));
    }

    #[test]
    fn test_validation_rejects_zero_ttl() {
        let config = AuthConfig {
            jwt_secret: Secret::new("s3cret".to_string()),
            token_ttl_secs: 0,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTokenTtl)
        ));
    }

    #[test]
    fn test_validation_accepts_valid_config() {
        let config = AuthConfig {
            jwt_secret: Secret::new("s3cret".to_string()),
            token_ttl_secs: 900,
        };
        assert!(config.validate().is_ok());
    }
}
