//! Service layer error types
//!
//! Provides a unified error type for all workflow operations.

use hrbot_core::{DomainError, Snowflake};
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain or store failure
    Domain(DomainError),

    /// Command used outside the channel it is restricted to
    WrongChannel { expected: Snowflake },

    /// Invoker lacks the role a command requires
    PermissionDenied { permission: String },

    /// Option payload did not match the command's shape
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::WrongChannel { expected } => {
                write!(f, "Command is only available in channel {expected}")
            }
            Self::PermissionDenied { permission } => {
                write!(f, "Missing required role: {permission}")
            }
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a wrong channel error
    pub fn wrong_channel(expected: Snowflake) -> Self {
        Self::WrongChannel { expected }
    }

    /// Create a permission denied error
    pub fn permission_denied(permission: impl Into<String>) -> Self {
        Self::PermissionDenied {
            permission: permission.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether the invoker was turned away before any state change
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::WrongChannel { .. } | Self::PermissionDenied { .. })
    }

    /// Whether the record store failed
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_store_failure())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_validation() {
                    400
                } else if e.is_notification() {
                    502
                } else {
                    500
                }
            }
            Self::WrongChannel { .. } | Self::PermissionDenied { .. } => 403,
            Self::Validation(_) => 400,
        }
    }

    /// Get the error code for responses and logs
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::WrongChannel { .. } => "WRONG_CHANNEL",
            Self::PermissionDenied { .. } => "MISSING_ROLE",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
