//! Loyalty tier entity models and DTOs.

use salonkit_core::tiers::TierSpec;
use salonkit_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `loyalty_tiers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LoyaltyTier {
    pub id: DbId,
    pub salon_id: DbId,
    pub name: String,
    pub points_threshold: i64,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl LoyaltyTier {
    /// Narrow view for the pure tier resolver.
    pub fn to_spec(&self) -> TierSpec {
        TierSpec {
            id: self.id,
            name: self.name.clone(),
            points_threshold: self.points_threshold,
        }
    }
}

/// DTO for creating a tier.
#[derive(Debug, Deserialize)]
pub struct CreateTier {
    pub salon_id: DbId,
    pub name: String,
    pub points_threshold: i64,
    pub description: Option<String>,
}

/// DTO for updating a tier. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateTier {
    pub name: Option<String>,
    pub points_threshold: Option<i64>,
    pub description: Option<String>,
}
