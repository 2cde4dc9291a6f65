/// Storage-specific errors
use thiserror::Error;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Stored row that cannot be turned back into a domain value
    #[error("Corrupt row: {0}")]
    CorruptRow(String),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for melo_core::MeloError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Database(e) => e.into(),
            other => melo_core::MeloError::storage(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use melo_core::MeloError;

    #[test]
    fn storage_errors_become_infrastructure_errors() {
        let err: MeloError = StorageError::Connection("unable to open database file".into()).into();
        assert!(err.is_infrastructure());

        let err: MeloError = StorageError::Database(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, MeloError::Database(_)));
    }
}
