//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidResetCode,

    // Authentication / authorization errors
    InvalidCredentials,
    Unauthorized,
    Forbidden,

    // Not found errors
    UserNotFound,
    PostNotFound,
    MediaNotFound,
    VideoNotFound,
    PageContentNotFound,

    // Conflict errors
    EmailTaken,
    SelfDemotion,

    // Infrastructure errors
    DatabaseError,
    EmailDeliveryFailed,
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidResetCode => "INVALID_RESET_CODE",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::PostNotFound => "POST_NOT_FOUND",
            ErrorCode::MediaNotFound => "MEDIA_NOT_FOUND",
            ErrorCode::VideoNotFound => "VIDEO_NOT_FOUND",
            ErrorCode::PageContentNotFound => "PAGE_CONTENT_NOT_FOUND",
            ErrorCode::EmailTaken => "EMAIL_TAKEN",
            ErrorCode::SelfDemotion => "SELF_DEMOTION",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::EmailDeliveryFailed => "EMAIL_DELIVERY_FAILED",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// The uniform credential error returned for both unknown email and
    /// wrong password.
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials, "Invalid credentials")
    }

    /// The uniform reset error returned for wrong and expired codes alike.
    pub fn invalid_reset_code() -> Self {
        Self::new(ErrorCode::InvalidResetCode, "Invalid or expired code")
    }

    /// Creates a database error from an underlying failure.
    pub fn database(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::DatabaseError, format!("Database error: {}", err))
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
