//! Loyalty account entity models and DTOs.

use salonkit_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `loyalty_accounts` table.
///
/// Invariant (enforced by the ledger repository and table CHECKs):
/// `points_balance = total_points_earned - total_points_redeemed - expired`,
/// and `points_balance >= 0` at all times.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LoyaltyAccount {
    pub id: DbId,
    pub client_id: DbId,
    pub salon_id: DbId,
    pub points_balance: i64,
    pub total_points_earned: i64,
    pub total_points_redeemed: i64,
    pub last_activity_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for an earn/redeem ledger mutation.
///
/// `points` is a positive magnitude; the stored sign is derived from the
/// transaction kind by the repository.
#[derive(Debug, Clone, Deserialize)]
pub struct PointsMovement {
    pub client_id: DbId,
    pub salon_id: DbId,
    pub points: i64,
    pub source: String,
    pub source_id: Option<DbId>,
    pub description: Option<String>,
}
