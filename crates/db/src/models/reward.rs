//! Reward catalog entity models and DTOs.

use salonkit_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `loyalty_rewards` table.
///
/// A reward optionally requires a specific service or product; fulfillment is
/// an external, manual process -- redemption only moves points.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reward {
    pub id: DbId,
    pub salon_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub points_cost: i64,
    pub is_active: bool,
    pub required_service_id: Option<DbId>,
    pub required_product_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a reward.
#[derive(Debug, Deserialize)]
pub struct CreateReward {
    pub salon_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub points_cost: i64,
    pub required_service_id: Option<DbId>,
    pub required_product_id: Option<DbId>,
}

/// DTO for updating a reward. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateReward {
    pub name: Option<String>,
    pub description: Option<String>,
    pub points_cost: Option<i64>,
    pub is_active: Option<bool>,
    pub required_service_id: Option<DbId>,
    pub required_product_id: Option<DbId>,
}
