//! Loyalty program settings validation and earn-rate arithmetic.
//!
//! Settings are per-salon configuration read by the earn/redeem paths. They
//! have no behavior of their own beyond validation and the
//! [`points_for_amount`] conversion used when awarding points for a purchase.

use crate::error::CoreError;

/// Partial update to a salon's loyalty program settings.
///
/// Absent fields keep their current (or default) value on upsert.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct SettingsPatch {
    /// Points awarded per whole currency unit spent.
    pub points_per_currency_unit: Option<i64>,
    /// Monetary value of one point, in cents.
    pub point_value_cents: Option<i64>,
    /// Minimum number of points a single redemption may spend.
    pub minimum_redemption_points: Option<i64>,
    /// Points granted on signup.
    pub welcome_bonus_points: Option<i64>,
    /// Points granted on the client's birthday.
    pub birthday_bonus_points: Option<i64>,
    /// Months until earned points expire. `None` disables expiry.
    pub expiry_months: Option<i32>,
}

/// Validate a settings patch before it reaches the database.
pub fn validate_settings_patch(patch: &SettingsPatch) -> Result<(), CoreError> {
    for (field, value) in [
        ("points_per_currency_unit", patch.points_per_currency_unit),
        ("point_value_cents", patch.point_value_cents),
        ("minimum_redemption_points", patch.minimum_redemption_points),
        ("welcome_bonus_points", patch.welcome_bonus_points),
        ("birthday_bonus_points", patch.birthday_bonus_points),
    ] {
        if let Some(v) = value {
            if v < 0 {
                return Err(CoreError::Validation(format!(
                    "{field} must be >= 0, got {v}"
                )));
            }
        }
    }
    if let Some(months) = patch.expiry_months {
        if months <= 0 {
            return Err(CoreError::Validation(format!(
                "expiry_months must be positive, got {months}"
            )));
        }
    }
    Ok(())
}

/// Points earned for a purchase amount, given the salon's earn rate.
///
/// `amount_cents` is the purchase total in cents; the result is floored so
/// partial currency units never award a point.
pub fn points_for_amount(amount_cents: i64, points_per_currency_unit: i64) -> i64 {
    if amount_cents <= 0 || points_per_currency_unit <= 0 {
        return 0;
    }
    amount_cents * points_per_currency_unit / 100
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
