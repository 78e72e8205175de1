//! Error types for the report and sample-data stores.
//!
//! Every store operation returns [`StoreResult`]. The HTTP layer decides the
//! status code from the variant; see `server::error`.
//!
//! ```rust
//! use report_builder::errors::StoreError;
//!
//! let err = StoreError::not_found("Report", 42);
//! assert!(err.is_client_error());
//! assert_eq!(err.to_string(), "Report 42 not found");
//! ```

use thiserror::Error;

/// Errors raised by the report and sample-data stores
#[derive(Error, Debug)]
pub enum StoreError {
    /// No row with the given primary key
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity name as shown to callers, e.g. `Report`
        entity: &'static str,
        id: i32,
    },

    /// Input failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A JSON text column could not be encoded or decoded
    #[error("Invalid JSON in column '{column}': {source}")]
    Serialization {
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        StoreError::NotFound { entity, id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation(message.into())
    }

    pub fn serialization(column: &'static str, source: serde_json::Error) -> Self {
        StoreError::Serialization { column, source }
    }

    /// Check if this is a client error (400-series)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            StoreError::NotFound { .. } | StoreError::Validation(_)
        )
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity_and_id() {
        let err = StoreError::not_found("Report", 7);
        assert_eq!(err.to_string(), "Report 7 not found");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_validation_is_client_error() {
        let err = StoreError::validation("Report name cannot be empty");
        assert!(err.is_client_error());
        assert_eq!(
            err.to_string(),
            "Validation failed: Report name cannot be empty"
        );
    }

    #[test]
    fn test_storage_errors_are_server_errors() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!StoreError::serialization("layout", source).is_client_error());

        let db_err = StoreError::from(sea_orm::DbErr::Custom("disk full".to_string()));
        assert!(!db_err.is_client_error());
        assert!(db_err.to_string().contains("disk full"));
    }
}
