//! Repository for the append-only `loyalty_transactions` table.
//!
//! Rows are inserted by the ledger mutations in `LoyaltyAccountRepo`; this
//! repository only reads.

use salonkit_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use salonkit_core::types::DbId;
use sqlx::PgPool;

use crate::models::loyalty_transaction::LoyaltyTransaction;

/// Column list for `loyalty_transactions` queries.
const COLUMNS: &str =
    "id, client_id, salon_id, points, kind, source, source_id, description, created_at";

/// Provides read access to the transaction log.
pub struct LoyaltyTransactionRepo;

impl LoyaltyTransactionRepo {
    /// List a client's transactions at a salon, most recent first.
    ///
    /// `limit` is clamped to at most 200 (default 50) so a missing query
    /// parameter can never produce an unbounded result set.
    pub async fn list_for_client(
        pool: &PgPool,
        client_id: DbId,
        salon_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<LoyaltyTransaction>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {COLUMNS} FROM loyalty_transactions \
             WHERE client_id = $1 AND salon_id = $2 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, LoyaltyTransaction>(&query)
            .bind(client_id)
            .bind(salon_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of transactions for a client at a salon.
    pub async fn count_for_client(
        pool: &PgPool,
        client_id: DbId,
        salon_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM loyalty_transactions WHERE client_id = $1 AND salon_id = $2",
        )
        .bind(client_id)
        .bind(salon_id)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }
}
