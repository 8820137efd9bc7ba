//! Error taxonomy for the storage contract
//!
//! Everything here is a constraint violation surfaced by the database
//! engine; retries and user-facing messaging belong to the calling
//! services.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Duplicate (user, exchange) subscription, duplicate
    /// (user, period, change) triple, or duplicate exchange name.
    /// Callers should treat this as "already exists".
    #[error("row already exists: {0}")]
    UniqueViolation(String),
    /// Insert referenced a user or exchange that does not exist.
    /// Callers must create parent rows first.
    #[error("referenced row does not exist: {0}")]
    ForeignKeyViolation(String),
    /// An update targeted a row that is not there. Raised by this layer,
    /// not the engine.
    #[error("row not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Db(DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => StoreError::UniqueViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                StoreError::ForeignKeyViolation(msg)
            }
            _ => StoreError::Db(err),
        }
    }
}

impl StoreError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, StoreError::UniqueViolation(_))
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, StoreError::ForeignKeyViolation(_))
    }
}
