//! Error types for sqlforge

use thiserror::Error;

/// Result type alias for builder operations
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Error types for statement construction and the executor boundary
#[derive(Debug, Error)]
pub enum BuilderError {
    /// The table argument has a type or shape that can never name a table
    #[error("Invalid table reference: got {0}")]
    InvalidTableRef(String),

    /// The data argument as a whole has an unsupported type or shape
    #[error("Invalid data payload: got {0}")]
    InvalidPayload(String),

    /// A record contains a field whose value type cannot be rendered
    #[error("Invalid value for column '{column}': got {detail}")]
    InvalidFieldValue { column: String, detail: String },

    /// No table was supplied and none is set on the builder
    #[error("No target table: none supplied and none set on the builder")]
    MissingTable,

    /// Database connection error (executor boundary)
    #[error("Connection error: {0}")]
    Connection(String),
}

impl BuilderError {
    /// Create an invalid-table error from a value description
    pub fn invalid_table(detail: impl Into<String>) -> Self {
        Self::InvalidTableRef(detail.into())
    }

    /// Create an invalid-payload error from a value description
    pub fn invalid_payload(detail: impl Into<String>) -> Self {
        Self::InvalidPayload(detail.into())
    }

    /// Create an invalid-field error for a specific column
    pub fn invalid_field(column: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvalidFieldValue {
            column: column.into(),
            detail: detail.into(),
        }
    }

    /// Check if this is an invalid-table error
    pub fn is_invalid_table(&self) -> bool {
        matches!(self, Self::InvalidTableRef(_))
    }

    /// Check if this is an invalid-payload error
    pub fn is_invalid_payload(&self) -> bool {
        matches!(self, Self::InvalidPayload(_))
    }

    /// Check if this is an invalid-field error
    pub fn is_invalid_field(&self) -> bool {
        matches!(self, Self::InvalidFieldValue { .. })
    }

    /// Check if this is a missing-table error
    pub fn is_missing_table(&self) -> bool {
        matches!(self, Self::MissingTable)
    }
}
