/// Core error types for Melo
use thiserror::Error;

/// Result type alias using `MeloError`
pub type Result<T> = std::result::Result<T, MeloError>;

/// Core error type for Melo
#[derive(Error, Debug)]
pub enum MeloError {
    /// Malformed or out-of-range input, detected before any catalog access
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up
        entity: String,
        /// Identifier that was not found
        id: String,
    },

    /// Duplicate entry
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Catalog store unreachable or misbehaving
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl MeloError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a duplicate entry error
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    /// Whether the error comes from the catalog infrastructure rather than the request
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::Storage(_) | Self::Database(_) | Self::Io(_) | Self::Serialization(_) | Self::Other(_)
        )
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for MeloError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
