//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Unknown list type: {0}")]
    InvalidListType(String),

    #[error("A tag or a document number is required")]
    EmptyBlacklistQuery,

    #[error("Invalid stored timestamp: {0}")]
    InvalidTimestamp(String),

    // =========================================================================
    // Notification Errors
    // =========================================================================
    #[error("Notification target unavailable: {0}")]
    NotificationTargetUnavailable(String),

    #[error("Notification failed: {0}")]
    NotificationFailed(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for responses and logs
    pub fn code(&self) -> &'static str {
        match self {
            // Validation
            Self::InvalidListType(_) => "INVALID_LIST_TYPE",
            Self::EmptyBlacklistQuery => "EMPTY_BLACKLIST_QUERY",
            Self::InvalidTimestamp(_) => "INVALID_TIMESTAMP",

            // Notification
            Self::NotificationTargetUnavailable(_) => "NOTIFICATION_TARGET_UNAVAILABLE",
            Self::NotificationFailed(_) => "NOTIFICATION_FAILED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidListType(_) | Self::EmptyBlacklistQuery)
    }

    /// Check if this error came from the notification path
    pub fn is_notification(&self) -> bool {
        matches!(
            self,
            Self::NotificationTargetUnavailable(_) | Self::NotificationFailed(_)
        )
    }

    /// Check if this is a store failure
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::InvalidTimestamp(_))
    }
}
