//! Loyalty transaction entity model.

use salonkit_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the append-only `loyalty_transactions` table.
///
/// `points` is signed: positive for earn/bonus, negative for redeem/expire.
/// Rows are created once and never mutated or deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LoyaltyTransaction {
    pub id: DbId,
    pub client_id: DbId,
    pub salon_id: DbId,
    pub points: i64,
    pub kind: String,
    pub source: String,
    pub source_id: Option<DbId>,
    pub description: Option<String>,
    pub created_at: Timestamp,
}
