//! Error handling for RealConnect
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the RealConnect core
#[derive(Error, Debug)]
pub enum RealConnectError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// Pool and socket failures surface as StoreUnavailable; statement-level
// failures stay Database.
impl From<sqlx::Error> for RealConnectError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::WorkerCrashed => {
                RealConnectError::StoreUnavailable(err.to_string())
            }
            sqlx::Error::Io(e) => RealConnectError::StoreUnavailable(e.to_string()),
            other => RealConnectError::Database(other),
        }
    }
}

/// Result type alias for RealConnect operations
pub type Result<T> = std::result::Result<T, RealConnectError>;

impl RealConnectError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            RealConnectError::Database(_) => false,
            RealConnectError::Migration(_) => false,
            RealConnectError::StoreUnavailable(_) => true,
            RealConnectError::Config(_) => false,
            RealConnectError::PermissionDenied(_) => false,
            RealConnectError::UserNotFound { .. } => false,
            RealConnectError::EventNotFound { .. } => false,
            RealConnectError::Serialization(_) => false,
            RealConnectError::Io(_) => true,
            RealConnectError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RealConnectError::Database(_) => ErrorSeverity::Critical,
            RealConnectError::Migration(_) => ErrorSeverity::Critical,
            RealConnectError::Config(_) => ErrorSeverity::Critical,
            RealConnectError::StoreUnavailable(_) => ErrorSeverity::Error,
            RealConnectError::PermissionDenied(_) => ErrorSeverity::Warning,
            RealConnectError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_pool_errors_map_to_store_unavailable() {
        let err = RealConnectError::from(sqlx::Error::PoolTimedOut);
        assert_matches!(err, RealConnectError::StoreUnavailable(_));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_statement_errors_stay_database() {
        let err = RealConnectError::from(sqlx::Error::RowNotFound);
        assert_matches!(err, RealConnectError::Database(_));
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_permission_denied_severity() {
        let err = RealConnectError::PermissionDenied("attendee list".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Warning);
    }
}
