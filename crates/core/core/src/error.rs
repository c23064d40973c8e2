//! Error types for HabitVault.
//!
//! This module defines the `HabitError` enum which represents all possible
//! errors that can occur within the habit-tracking core.

use thiserror::Error;

/// The main error type for HabitVault operations.
///
/// This enum covers all error cases that can occur during validation,
/// lookup, the toggle workflow, and storage operations.
#[derive(Debug, Error)]
pub enum HabitError {
    // ==================== Validation Errors ====================
    /// A required field is missing.
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A field value is invalid.
    #[error("Invalid field value for '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    // ==================== Storage Errors ====================
    /// A database operation failed.
    #[error("Database error: {message}")]
    DatabaseError { message: String },

    /// The requested record was not found.
    #[error("Record not found: {entity} with {key}={value}")]
    NotFound {
        entity: String,
        key: String,
        value: String,
    },

    /// A unique constraint was violated (e.g., a second completion for the
    /// same (user, habit, date) key).
    #[error("Duplicate entry: {entity} with {field}={value} already exists")]
    DuplicateEntry {
        entity: String,
        field: String,
        value: String,
    },

    // ==================== Internal Errors ====================
    /// Serialization/deserialization failed.
    #[error("Serialization error: {message}")]
    SerializationError { message: String },
}

impl HabitError {
    /// Creates a new database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::DatabaseError {
            message: message.into(),
        }
    }

    /// Creates a new missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates a new invalid field error.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new not found error.
    pub fn not_found(
        entity: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            entity: entity.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a new duplicate entry error.
    pub fn duplicate(
        entity: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::DuplicateEntry {
            entity: entity.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    /// Returns true if this is a user-facing error (vs internal).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::InvalidField { .. }
                | Self::NotFound { .. }
                | Self::DuplicateEntry { .. }
        )
    }

    /// Returns an HTTP status code appropriate for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::DuplicateEntry { .. } => 409,
            Self::MissingField { .. } | Self::InvalidField { .. } => 422,
            _ => 500,
        }
    }
}

/// A Result type alias using HabitError.
pub type HabitResult<T> = Result<T, HabitError>;

impl From<serde_json::Error> for HabitError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HabitError::missing_field("title");
        assert_eq!(err.to_string(), "Missing required field: title");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(HabitError::not_found("habit", "id", "h1").status_code(), 404);
        assert_eq!(
            HabitError::duplicate("completion", "date", "2024-01-10").status_code(),
            409
        );
        assert_eq!(HabitError::missing_field("title").status_code(), 422);
        assert_eq!(HabitError::database("boom").status_code(), 500);
    }

    #[test]
    fn test_is_user_error() {
        assert!(HabitError::missing_field("date").is_user_error());
        assert!(!HabitError::database("connection reset").is_user_error());
    }
}
