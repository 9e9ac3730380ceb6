//! Loyalty transaction taxonomy and sign normalization.
//!
//! The transaction log is append-only: every balance change is recorded as a
//! signed point delta with a kind and a source attribution. Callers supply a
//! positive point amount; the sign stored in the log is derived from the kind
//! here rather than trusted from input.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Transaction kinds that add points to an account.
pub const KIND_EARN: &str = "earn";
pub const KIND_BONUS: &str = "bonus";

/// Transaction kinds that remove points from an account.
pub const KIND_REDEEM: &str = "redeem";
pub const KIND_EXPIRE: &str = "expire";

/// Maximum length for the free-text `source` attribution.
pub const MAX_SOURCE_LENGTH: usize = 100;

/// Maximum length for a transaction description.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

// ---------------------------------------------------------------------------
// Transaction kind
// ---------------------------------------------------------------------------

/// The four kinds of point movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Earn,
    Bonus,
    Redeem,
    Expire,
}

impl TransactionKind {
    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Earn => KIND_EARN,
            Self::Bonus => KIND_BONUS,
            Self::Redeem => KIND_REDEEM,
            Self::Expire => KIND_EXPIRE,
        }
    }

    /// Whether this kind adds points to the balance.
    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Earn | Self::Bonus)
    }
}

// ---------------------------------------------------------------------------
// Sign normalization
// ---------------------------------------------------------------------------

/// Compute the signed point delta stored in the log for a transaction.
///
/// `points` is an already-validated positive magnitude; the sign is derived
/// from the kind (earn/bonus positive, redeem/expire negative). All ledger
/// inserts go through this, so a stored row's sign always matches its kind.
pub fn signed_points(kind: TransactionKind, points: i64) -> i64 {
    debug_assert!(points > 0);
    if kind.is_credit() {
        points
    } else {
        -points
    }
}

/// Validate a point magnitude for an earn/redeem request.
pub fn validate_points(points: i64) -> Result<(), CoreError> {
    if points <= 0 {
        return Err(CoreError::Validation(format!(
            "points must be positive, got {points}"
        )));
    }
    Ok(())
}

/// Validate the `source` attribution of a transaction.
pub fn validate_source(source: &str) -> Result<(), CoreError> {
    if source.trim().is_empty() {
        return Err(CoreError::Validation("source must not be empty".into()));
    }
    if source.len() > MAX_SOURCE_LENGTH {
        return Err(CoreError::Validation(format!(
            "source exceeds maximum length of {MAX_SOURCE_LENGTH}"
        )));
    }
    Ok(())
}

/// Validate an optional transaction description.
pub fn validate_description(description: Option<&str>) -> Result<(), CoreError> {
    if let Some(desc) = description {
        if desc.len() > MAX_DESCRIPTION_LENGTH {
            return Err(CoreError::Validation(format!(
                "description exceeds maximum length of {MAX_DESCRIPTION_LENGTH}"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
