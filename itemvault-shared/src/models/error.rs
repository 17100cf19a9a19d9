//! Store error type shared by every persistence backend
//!
//! Backends classify their failures into the same small set of kinds so
//! callers never have to inspect driver-specific errors:
//!
//! - `Validation`: the input violates a domain rule (e.g. empty item name)
//! - `Conflict`: a uniqueness constraint rejected the write
//! - `NotFound`: the addressed record does not exist
//! - `Database`: anything else the backend reported

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Input rejected before reaching the backend
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unique constraint violation
    #[error("Record already exists")]
    Conflict,

    /// Record does not exist
    #[error("Record not found")]
    NotFound,

    /// Unexpected backend failure
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                StoreError::Conflict
            }
            other => StoreError::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[test]
    fn test_other_errors_map_to_database() {
        let err: StoreError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(StoreError::Conflict.to_string(), "Record already exists");
        assert_eq!(
            StoreError::Validation("Name is required".to_string()).to_string(),
            "Validation failed: Name is required"
        );
    }
}
