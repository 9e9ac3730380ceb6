//! Loyalty program settings entity model.
//!
//! The update DTO is [`salonkit_core::settings::SettingsPatch`]; validation
//! lives in `core` next to it.

use salonkit_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `loyalty_program_settings` table (one per salon).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LoyaltyProgramSettings {
    pub id: DbId,
    pub salon_id: DbId,
    pub points_per_currency_unit: i64,
    pub point_value_cents: i64,
    pub minimum_redemption_points: i64,
    pub welcome_bonus_points: i64,
    pub birthday_bonus_points: i64,
    pub expiry_months: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
