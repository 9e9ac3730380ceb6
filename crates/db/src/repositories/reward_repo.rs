//! Repository for the `loyalty_rewards` table.

use salonkit_core::types::DbId;
use sqlx::PgPool;

use crate::models::reward::{CreateReward, Reward, UpdateReward};

/// Column list for `loyalty_rewards` queries.
const COLUMNS: &str = "id, salon_id, name, description, points_cost, is_active, \
    required_service_id, required_product_id, created_at, updated_at";

/// Provides CRUD operations for the reward catalog.
pub struct RewardRepo;

impl RewardRepo {
    /// List a salon's rewards, cheapest first.
    ///
    /// When `include_inactive` is `false`, deactivated rewards are omitted.
    pub async fn list_for_salon(
        pool: &PgPool,
        salon_id: DbId,
        include_inactive: bool,
    ) -> Result<Vec<Reward>, sqlx::Error> {
        let filter = if include_inactive {
            ""
        } else {
            "AND is_active = true"
        };
        let query = format!(
            "SELECT {COLUMNS} FROM loyalty_rewards \
             WHERE salon_id = $1 {filter} \
             ORDER BY points_cost ASC, id ASC"
        );
        sqlx::query_as::<_, Reward>(&query)
            .bind(salon_id)
            .fetch_all(pool)
            .await
    }

    /// Find a reward by id within a salon.
    pub async fn find(
        pool: &PgPool,
        reward_id: DbId,
        salon_id: DbId,
    ) -> Result<Option<Reward>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM loyalty_rewards WHERE id = $1 AND salon_id = $2");
        sqlx::query_as::<_, Reward>(&query)
            .bind(reward_id)
            .bind(salon_id)
            .fetch_optional(pool)
            .await
    }

    /// Create a reward (active by default).
    pub async fn create(pool: &PgPool, input: &CreateReward) -> Result<Reward, sqlx::Error> {
        let query = format!(
            "INSERT INTO loyalty_rewards \
                (salon_id, name, description, points_cost, required_service_id, required_product_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reward>(&query)
            .bind(input.salon_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.points_cost)
            .bind(input.required_service_id)
            .bind(input.required_product_id)
            .fetch_one(pool)
            .await
    }

    /// Update a reward. Absent fields keep their current value.
    pub async fn update(
        pool: &PgPool,
        reward_id: DbId,
        salon_id: DbId,
        input: &UpdateReward,
    ) -> Result<Option<Reward>, sqlx::Error> {
        let query = format!(
            "UPDATE loyalty_rewards SET \
                name = COALESCE($3, name), \
                description = COALESCE($4, description), \
                points_cost = COALESCE($5, points_cost), \
                is_active = COALESCE($6, is_active), \
                required_service_id = COALESCE($7, required_service_id), \
                required_product_id = COALESCE($8, required_product_id), \
                updated_at = NOW() \
             WHERE id = $1 AND salon_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reward>(&query)
            .bind(reward_id)
            .bind(salon_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.points_cost)
            .bind(input.is_active)
            .bind(input.required_service_id)
            .bind(input.required_product_id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-deactivate a reward. Returns `true` if an active row was found.
    ///
    /// Redemption history references rewards by id, so rows are never
    /// physically deleted.
    pub async fn deactivate(
        pool: &PgPool,
        reward_id: DbId,
        salon_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE loyalty_rewards SET is_active = false, updated_at = NOW() \
             WHERE id = $1 AND salon_id = $2 AND is_active = true",
        )
        .bind(reward_id)
        .bind(salon_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
