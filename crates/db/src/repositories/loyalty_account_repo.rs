//! Repository for the `loyalty_accounts` table and the ledger mutations.
//!
//! Earn and redeem each run as a single database transaction that appends a
//! `loyalty_transactions` row and updates the account aggregates together.
//! Redeem uses a conditional update (`WHERE points_balance >= cost`); the row
//! lock it takes serializes concurrent redemptions for the same account, so
//! two simultaneous redeems can never both succeed past the balance.

use salonkit_core::ledger::{signed_points, TransactionKind};
use salonkit_core::types::DbId;
use sqlx::PgPool;

use crate::models::loyalty_account::{LoyaltyAccount, PointsMovement};

/// Column list for `loyalty_accounts` queries.
const COLUMNS: &str = "id, client_id, salon_id, points_balance, total_points_earned, \
    total_points_redeemed, last_activity_at, created_at, updated_at";

/// Result of a redeem attempt.
#[derive(Debug)]
pub enum RedeemOutcome {
    /// The redemption succeeded; the refreshed account is returned.
    Redeemed(LoyaltyAccount),
    /// The account exists but holds fewer points than requested.
    /// No transaction row was appended.
    InsufficientBalance { available: i64 },
    /// The client has never earned points at this salon.
    NoAccount,
}

/// Provides ledger operations for loyalty accounts.
pub struct LoyaltyAccountRepo;

impl LoyaltyAccountRepo {
    /// Find the account for a (client, salon) pair, if one exists.
    pub async fn find(
        pool: &PgPool,
        client_id: DbId,
        salon_id: DbId,
    ) -> Result<Option<LoyaltyAccount>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM loyalty_accounts WHERE client_id = $1 AND salon_id = $2");
        sqlx::query_as::<_, LoyaltyAccount>(&query)
            .bind(client_id)
            .bind(salon_id)
            .fetch_optional(pool)
            .await
    }

    /// Credit points to an account (kind `earn` or `bonus`).
    ///
    /// Appends the transaction row and upserts the account in one database
    /// transaction. The account is created implicitly on first credit.
    /// Input must already be validated (`points > 0`, non-empty source);
    /// callers go through the handler-level checks in `salonkit_core`.
    pub async fn credit(
        pool: &PgPool,
        kind: TransactionKind,
        movement: &PointsMovement,
    ) -> Result<LoyaltyAccount, sqlx::Error> {
        debug_assert!(kind.is_credit());
        let mut tx = pool.begin().await?;

        sqlx::query(
            "INSERT INTO loyalty_transactions \
                (client_id, salon_id, points, kind, source, source_id, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(movement.client_id)
        .bind(movement.salon_id)
        .bind(signed_points(kind, movement.points))
        .bind(kind.as_str())
        .bind(&movement.source)
        .bind(movement.source_id)
        .bind(&movement.description)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "INSERT INTO loyalty_accounts (client_id, salon_id, points_balance, total_points_earned) \
             VALUES ($1, $2, $3, $3) \
             ON CONFLICT (client_id, salon_id) DO UPDATE SET \
                points_balance = loyalty_accounts.points_balance + EXCLUDED.points_balance, \
                total_points_earned = loyalty_accounts.total_points_earned + EXCLUDED.total_points_earned, \
                last_activity_at = NOW(), \
                updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        let account = sqlx::query_as::<_, LoyaltyAccount>(&query)
            .bind(movement.client_id)
            .bind(movement.salon_id)
            .bind(movement.points)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(
            client_id = movement.client_id,
            salon_id = movement.salon_id,
            points = movement.points,
            kind = kind.as_str(),
            balance = account.points_balance,
            "Credited loyalty points"
        );
        Ok(account)
    }

    /// Debit points from an account (kind `redeem`).
    ///
    /// The balance check and the debit are one conditional update; when it
    /// matches no row the whole transaction rolls back and the log is left
    /// untouched. The log row stores the negated point value.
    pub async fn redeem(
        pool: &PgPool,
        movement: &PointsMovement,
    ) -> Result<RedeemOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE loyalty_accounts SET \
                points_balance = points_balance - $3, \
                total_points_redeemed = total_points_redeemed + $3, \
                last_activity_at = NOW(), \
                updated_at = NOW() \
             WHERE client_id = $1 AND salon_id = $2 AND points_balance >= $3 \
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, LoyaltyAccount>(&query)
            .bind(movement.client_id)
            .bind(movement.salon_id)
            .bind(movement.points)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(account) = updated else {
            tx.rollback().await?;
            // Distinguish a missing account from an underfunded one.
            return match Self::find(pool, movement.client_id, movement.salon_id).await? {
                Some(existing) => Ok(RedeemOutcome::InsufficientBalance {
                    available: existing.points_balance,
                }),
                None => Ok(RedeemOutcome::NoAccount),
            };
        };

        sqlx::query(
            "INSERT INTO loyalty_transactions \
                (client_id, salon_id, points, kind, source, source_id, description) \
             VALUES ($1, $2, $3, 'redeem', $4, $5, $6)",
        )
        .bind(movement.client_id)
        .bind(movement.salon_id)
        .bind(signed_points(TransactionKind::Redeem, movement.points))
        .bind(&movement.source)
        .bind(movement.source_id)
        .bind(&movement.description)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(
            client_id = movement.client_id,
            salon_id = movement.salon_id,
            points = movement.points,
            balance = account.points_balance,
            "Redeemed loyalty points"
        );
        Ok(RedeemOutcome::Redeemed(account))
    }
}
