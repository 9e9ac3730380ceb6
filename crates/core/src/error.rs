//! Shared domain error type.
//!
//! `CoreError` is the error vocabulary of the loyalty domain. The API crate
//! maps each variant to an HTTP status and stable error code; repositories
//! return it alongside `sqlx::Error` where a domain condition (insufficient
//! balance, missing account) is detected inside a database transaction.

use crate::types::DbId;

/// Domain-level errors for loyalty operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input failed validation before any database work.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A redemption asked for more points than the account holds.
    #[error("Insufficient balance: {available} available, {requested} requested")]
    InsufficientBalance { available: i64, requested: i64 },

    /// The reward exists but is deactivated.
    #[error("Reward {0} is not active")]
    RewardInactive(DbId),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
