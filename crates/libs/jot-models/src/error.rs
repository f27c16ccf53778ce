//! Storage error types.

/// Storage operation errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Database connection pool error.
    #[error(transparent)]
    R2D2(#[from] diesel::r2d2::PoolError),

    /// Diesel ORM operation error.
    #[error(transparent)]
    Diesel(diesel::result::Error),

    /// A unique constraint rejected the write.
    #[error("Duplicate key")]
    DuplicateKey,

    /// An in-memory lock was poisoned by a panicking thread.
    #[error("Storage lock poisoned")]
    LockPoisoned,
}

impl From<diesel::result::Error> for Error {
    fn from(value: diesel::result::Error) -> Self {
        match value {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => Self::DuplicateKey,
            other => Self::Diesel(other),
        }
    }
}
