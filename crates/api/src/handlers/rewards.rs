//! Handlers for the reward catalog and the reward redemption gate.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use salonkit_core::error::CoreError;
use salonkit_core::types::{DbId, Timestamp};
use salonkit_db::models::loyalty_account::{LoyaltyAccount, PointsMovement};
use salonkit_db::models::reward::{CreateReward, Reward, UpdateReward};
use salonkit_db::repositories::RewardRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::handlers::ledger::{ensure_minimum_redemption, execute_redeem};
use crate::query::{RewardListParams, TenantParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Attribution recorded on ledger rows created by the redemption gate.
const SOURCE_REWARD_REDEMPTION: &str = "reward_redemption";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body for `POST /loyalty/rewards/{id}/redeem`.
#[derive(Debug, Deserialize)]
pub struct RedeemRewardBody {
    pub client_id: DbId,
    pub salon_id: DbId,
}

/// Confirmation returned by a successful reward redemption.
///
/// Fulfillment of the underlying service/product is an external, manual
/// process; this only records the point movement.
#[derive(Debug, Serialize)]
pub struct RedemptionResult {
    pub account: LoyaltyAccount,
    pub reward_id: DbId,
    pub points_spent: i64,
    pub redeemed_at: Timestamp,
}

fn validate_reward_fields(name: &str, points_cost: i64) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("reward name must not be empty".into()));
    }
    if points_cost <= 0 {
        return Err(CoreError::Validation(format!(
            "points_cost must be positive, got {points_cost}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Catalog CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/loyalty/rewards?salon_id=[&include_inactive=]
pub async fn list_rewards(
    State(state): State<AppState>,
    Query(params): Query<RewardListParams>,
) -> AppResult<Json<DataResponse<Vec<Reward>>>> {
    let rewards =
        RewardRepo::list_for_salon(&state.pool, params.salon_id, params.include_inactive).await?;
    Ok(Json(DataResponse { data: rewards }))
}

/// POST /api/v1/loyalty/rewards
pub async fn create_reward(
    State(state): State<AppState>,
    Json(input): Json<CreateReward>,
) -> AppResult<(StatusCode, Json<DataResponse<Reward>>)> {
    validate_reward_fields(&input.name, input.points_cost)?;

    let reward = RewardRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: reward })))
}

/// PUT /api/v1/loyalty/rewards/{id}?salon_id=
pub async fn update_reward(
    State(state): State<AppState>,
    Path(reward_id): Path<DbId>,
    Query(params): Query<TenantParams>,
    Json(input): Json<UpdateReward>,
) -> AppResult<Json<DataResponse<Reward>>> {
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(CoreError::Validation("reward name must not be empty".into()).into());
        }
    }
    if let Some(cost) = input.points_cost {
        if cost <= 0 {
            return Err(CoreError::Validation(format!(
                "points_cost must be positive, got {cost}"
            ))
            .into());
        }
    }

    let reward = RewardRepo::update(&state.pool, reward_id, params.salon_id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Reward",
            id: reward_id,
        })?;

    Ok(Json(DataResponse { data: reward }))
}

/// DELETE /api/v1/loyalty/rewards/{id}?salon_id=
///
/// Soft-deactivates the reward; history keeps referencing it. Returns 204 on
/// success, 404 when no active reward matches.
pub async fn deactivate_reward(
    State(state): State<AppState>,
    Path(reward_id): Path<DbId>,
    Query(params): Query<TenantParams>,
) -> AppResult<impl IntoResponse> {
    let deactivated = RewardRepo::deactivate(&state.pool, reward_id, params.salon_id).await?;
    if !deactivated {
        return Err(CoreError::NotFound {
            entity: "Reward",
            id: reward_id,
        }
        .into());
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Redemption gate
// ---------------------------------------------------------------------------

/// POST /api/v1/loyalty/rewards/{id}/redeem
///
/// Validate the reward (exists, active) and the client's balance, then debit
/// `points_cost` through the ledger with source attribution back to the
/// reward. 404 for an unknown reward, 409 REWARD_INACTIVE when deactivated,
/// 409 INSUFFICIENT_BALANCE when the balance cannot cover the cost.
pub async fn redeem_reward(
    State(state): State<AppState>,
    Path(reward_id): Path<DbId>,
    Json(body): Json<RedeemRewardBody>,
) -> AppResult<Json<DataResponse<RedemptionResult>>> {
    let reward = RewardRepo::find(&state.pool, reward_id, body.salon_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Reward",
            id: reward_id,
        })?;
    if !reward.is_active {
        return Err(CoreError::RewardInactive(reward_id).into());
    }

    ensure_minimum_redemption(&state, body.salon_id, reward.points_cost).await?;

    let movement = PointsMovement {
        client_id: body.client_id,
        salon_id: body.salon_id,
        points: reward.points_cost,
        source: SOURCE_REWARD_REDEMPTION.to_string(),
        source_id: Some(reward.id),
        description: Some(format!("Redeemed reward: {}", reward.name)),
    };
    let account = execute_redeem(&state, &movement).await?;

    let redeemed_at = account.last_activity_at;
    Ok(Json(DataResponse {
        data: RedemptionResult {
            account,
            reward_id: reward.id,
            points_spent: reward.points_cost,
            redeemed_at,
        },
    }))
}
