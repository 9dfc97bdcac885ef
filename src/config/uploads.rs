//! Upload storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Upload storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UploadsConfig {
    /// Directory uploads are written to
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Public URL prefix files are served under
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,
}

impl UploadsConfig {
    /// Upload directory as a path
    pub fn dir_path(&self) -> PathBuf {
        PathBuf::from(&self.dir)
    }

    /// Validate upload configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dir.is_empty() || self.url_prefix.is_empty() {
            return Err(ValidationError::InvalidUploadDir);
        }
        Ok(())
    }
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            url_prefix: default_url_prefix(),
        }
    }
}

fn default_dir() -> String {
    "uploads".to_string()
}

fn default_url_prefix() -> String {
    "/uploads".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UploadsConfig::default();
        assert_eq!(config.dir, "uploads");
        assert_eq!(config.url_prefix, "/uploads");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_dir() {
        let config = UploadsConfig {
            dir: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
