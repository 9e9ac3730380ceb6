//! Repository for the `loyalty_program_settings` table (one row per salon).

use salonkit_core::settings::SettingsPatch;
use salonkit_core::types::DbId;
use sqlx::PgPool;

use crate::models::loyalty_settings::LoyaltyProgramSettings;

/// Column list for `loyalty_program_settings` queries.
const COLUMNS: &str = "id, salon_id, points_per_currency_unit, point_value_cents, \
    minimum_redemption_points, welcome_bonus_points, birthday_bonus_points, expiry_months, \
    created_at, updated_at";

/// Provides read/upsert access to a salon's program settings.
pub struct LoyaltySettingsRepo;

impl LoyaltySettingsRepo {
    /// Get the settings row for a salon, if configured.
    pub async fn find_for_salon(
        pool: &PgPool,
        salon_id: DbId,
    ) -> Result<Option<LoyaltyProgramSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM loyalty_program_settings WHERE salon_id = $1");
        sqlx::query_as::<_, LoyaltyProgramSettings>(&query)
            .bind(salon_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or partially update a salon's settings in one round-trip.
    ///
    /// Absent patch fields keep the existing value (or the column default on
    /// first insert).
    pub async fn upsert(
        pool: &PgPool,
        salon_id: DbId,
        patch: &SettingsPatch,
    ) -> Result<LoyaltyProgramSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO loyalty_program_settings \
                (salon_id, points_per_currency_unit, point_value_cents, \
                 minimum_redemption_points, welcome_bonus_points, birthday_bonus_points, \
                 expiry_months) \
             VALUES ($1, COALESCE($2, 1), COALESCE($3, 1), COALESCE($4, 0), COALESCE($5, 0), \
                 COALESCE($6, 0), $7) \
             ON CONFLICT (salon_id) DO UPDATE SET \
                points_per_currency_unit = COALESCE($2, loyalty_program_settings.points_per_currency_unit), \
                point_value_cents = COALESCE($3, loyalty_program_settings.point_value_cents), \
                minimum_redemption_points = COALESCE($4, loyalty_program_settings.minimum_redemption_points), \
                welcome_bonus_points = COALESCE($5, loyalty_program_settings.welcome_bonus_points), \
                birthday_bonus_points = COALESCE($6, loyalty_program_settings.birthday_bonus_points), \
                expiry_months = COALESCE($7, loyalty_program_settings.expiry_months), \
                updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LoyaltyProgramSettings>(&query)
            .bind(salon_id)
            .bind(patch.points_per_currency_unit)
            .bind(patch.point_value_cents)
            .bind(patch.minimum_redemption_points)
            .bind(patch.welcome_bonus_points)
            .bind(patch.birthday_bonus_points)
            .bind(patch.expiry_months)
            .fetch_one(pool)
            .await
    }
}
