//! Unified error types for all layers of the application.

use thiserror::Error;

/// Unified error type for Campus Registry.
///
/// Covers domain, configuration, and data-access failures. Persistence
/// errors pass through the single [`From<sqlx::Error>`] mapping and are
/// never wrapped further up the stack.
#[derive(Error, Debug)]
pub enum CampusError {
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error (e.g., duplicate entry)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A stored enum code does not match any known domain value.
    ///
    /// This is a data-integrity bug, not a handled business error.
    #[error("invalid {field} code '{value}' on user normalization")]
    Mapping {
        field: &'static str,
        value: String,
    },

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CampusError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Mapping { .. } => "MAPPING_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates a mapping error for an unknown stored enum code.
    #[must_use]
    pub fn mapping<T: Into<String>>(field: &'static str, value: T) -> Self {
        Self::Mapping {
            field,
            value: value.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for CampusError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => {
                // Check for unique constraint violation
                if let Some(code) = db_err.code() {
                    if code == "23505" || code == "1062" {
                        // PostgreSQL / MySQL unique violation
                        return Self::Conflict(db_err.message().to_string());
                    }
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CampusError::not_found("user", 1).error_code(), "NOT_FOUND");
        assert_eq!(
            CampusError::validation("invalid email").error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(CampusError::conflict("duplicate").error_code(), "CONFLICT");
        assert_eq!(
            CampusError::mapping("role", "WIZARD").error_code(),
            "MAPPING_ERROR"
        );
        assert_eq!(
            CampusError::Database("db".to_string()).error_code(),
            "DATABASE_ERROR"
        );
        assert_eq!(
            CampusError::Configuration("bad".to_string()).error_code(),
            "CONFIGURATION_ERROR"
        );
        assert_eq!(CampusError::internal("oops").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_constructors() {
        let not_found = CampusError::not_found("user", "123");
        assert!(not_found.to_string().contains("user"));
        assert!(not_found.to_string().contains("123"));

        let conflict = CampusError::conflict("duplicate entry");
        assert!(conflict.to_string().contains("duplicate entry"));
    }

    #[test]
    fn test_mapping_error_names_the_field() {
        let gender = CampusError::mapping("gender", "UNKNOWN");
        assert!(gender.to_string().contains("gender"));
        assert!(gender.to_string().contains("UNKNOWN"));

        let role = CampusError::mapping("role", "WIZARD");
        assert!(role.to_string().contains("role"));
        assert!(!role.to_string().contains("gender"));
    }
}
