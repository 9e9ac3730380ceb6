//! Handlers for loyalty tier administration.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use salonkit_core::error::CoreError;
use salonkit_core::tiers::{validate_tier_name, validate_tier_threshold};
use salonkit_core::types::DbId;
use salonkit_db::models::loyalty_tier::{CreateTier, LoyaltyTier, UpdateTier};
use salonkit_db::repositories::LoyaltyTierRepo;

use crate::error::AppResult;
use crate::query::TenantParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/loyalty/tiers?salon_id=
///
/// List the salon's tiers ordered by threshold ascending.
pub async fn list_tiers(
    State(state): State<AppState>,
    Query(params): Query<TenantParams>,
) -> AppResult<Json<DataResponse<Vec<LoyaltyTier>>>> {
    let tiers = LoyaltyTierRepo::list_for_salon(&state.pool, params.salon_id).await?;
    Ok(Json(DataResponse { data: tiers }))
}

/// POST /api/v1/loyalty/tiers
pub async fn create_tier(
    State(state): State<AppState>,
    Json(input): Json<CreateTier>,
) -> AppResult<(StatusCode, Json<DataResponse<LoyaltyTier>>)> {
    validate_tier_name(&input.name)?;
    validate_tier_threshold(input.points_threshold)?;

    let tier = LoyaltyTierRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: tier })))
}

/// PUT /api/v1/loyalty/tiers/{id}?salon_id=
pub async fn update_tier(
    State(state): State<AppState>,
    Path(tier_id): Path<DbId>,
    Query(params): Query<TenantParams>,
    Json(input): Json<UpdateTier>,
) -> AppResult<Json<DataResponse<LoyaltyTier>>> {
    if let Some(name) = &input.name {
        validate_tier_name(name)?;
    }
    if let Some(threshold) = input.points_threshold {
        validate_tier_threshold(threshold)?;
    }

    let tier = LoyaltyTierRepo::update(&state.pool, tier_id, params.salon_id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "LoyaltyTier",
            id: tier_id,
        })?;

    Ok(Json(DataResponse { data: tier }))
}

/// DELETE /api/v1/loyalty/tiers/{id}?salon_id=
///
/// Returns 204 No Content on success, 404 if the tier does not exist in the
/// salon.
pub async fn delete_tier(
    State(state): State<AppState>,
    Path(tier_id): Path<DbId>,
    Query(params): Query<TenantParams>,
) -> AppResult<impl IntoResponse> {
    let deleted = LoyaltyTierRepo::delete(&state.pool, tier_id, params.salon_id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "LoyaltyTier",
            id: tier_id,
        }
        .into());
    }
    Ok(StatusCode::NO_CONTENT)
}
