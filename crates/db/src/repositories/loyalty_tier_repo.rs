//! Repository for the `loyalty_tiers` table.

use salonkit_core::types::DbId;
use sqlx::PgPool;

use crate::models::loyalty_tier::{CreateTier, LoyaltyTier, UpdateTier};

/// Column list for `loyalty_tiers` queries.
const COLUMNS: &str = "id, salon_id, name, points_threshold, description, created_at, updated_at";

/// Provides CRUD operations for loyalty tiers.
pub struct LoyaltyTierRepo;

impl LoyaltyTierRepo {
    /// List a salon's tiers ordered by threshold ascending.
    ///
    /// Equal thresholds are ordered by id so the resolver's tie-break is
    /// reflected in the listing.
    pub async fn list_for_salon(
        pool: &PgPool,
        salon_id: DbId,
    ) -> Result<Vec<LoyaltyTier>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM loyalty_tiers \
             WHERE salon_id = $1 \
             ORDER BY points_threshold ASC, id ASC"
        );
        sqlx::query_as::<_, LoyaltyTier>(&query)
            .bind(salon_id)
            .fetch_all(pool)
            .await
    }

    /// Find a tier by id within a salon.
    pub async fn find(
        pool: &PgPool,
        tier_id: DbId,
        salon_id: DbId,
    ) -> Result<Option<LoyaltyTier>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM loyalty_tiers WHERE id = $1 AND salon_id = $2");
        sqlx::query_as::<_, LoyaltyTier>(&query)
            .bind(tier_id)
            .bind(salon_id)
            .fetch_optional(pool)
            .await
    }

    /// Create a tier.
    pub async fn create(pool: &PgPool, input: &CreateTier) -> Result<LoyaltyTier, sqlx::Error> {
        let query = format!(
            "INSERT INTO loyalty_tiers (salon_id, name, points_threshold, description) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LoyaltyTier>(&query)
            .bind(input.salon_id)
            .bind(&input.name)
            .bind(input.points_threshold)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Update a tier. Absent fields keep their current value.
    ///
    /// Returns `None` if the tier does not exist in the salon.
    pub async fn update(
        pool: &PgPool,
        tier_id: DbId,
        salon_id: DbId,
        input: &UpdateTier,
    ) -> Result<Option<LoyaltyTier>, sqlx::Error> {
        let query = format!(
            "UPDATE loyalty_tiers SET \
                name = COALESCE($3, name), \
                points_threshold = COALESCE($4, points_threshold), \
                description = COALESCE($5, description), \
                updated_at = NOW() \
             WHERE id = $1 AND salon_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LoyaltyTier>(&query)
            .bind(tier_id)
            .bind(salon_id)
            .bind(&input.name)
            .bind(input.points_threshold)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a tier. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, tier_id: DbId, salon_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM loyalty_tiers WHERE id = $1 AND salon_id = $2")
            .bind(tier_id)
            .bind(salon_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
