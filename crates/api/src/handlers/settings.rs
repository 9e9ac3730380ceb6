//! Handlers for per-salon loyalty program settings.

use axum::extract::{Query, State};
use axum::Json;
use salonkit_core::error::CoreError;
use salonkit_core::settings::{validate_settings_patch, SettingsPatch};
use salonkit_core::types::DbId;
use salonkit_db::models::loyalty_settings::LoyaltyProgramSettings;
use salonkit_db::repositories::LoyaltySettingsRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::query::TenantParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `PUT /loyalty/settings`: tenant id plus a partial patch.
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsBody {
    pub salon_id: DbId,
    #[serde(flatten)]
    pub patch: SettingsPatch,
}

/// GET /api/v1/loyalty/settings?salon_id=
///
/// Return the salon's program settings, or 404 until they are first written.
pub async fn get_settings(
    State(state): State<AppState>,
    Query(params): Query<TenantParams>,
) -> AppResult<Json<DataResponse<LoyaltyProgramSettings>>> {
    let settings = LoyaltySettingsRepo::find_for_salon(&state.pool, params.salon_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "LoyaltyProgramSettings",
            id: params.salon_id,
        })?;

    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/loyalty/settings
///
/// Create or partially update the salon's program settings. Absent fields
/// keep their current value.
pub async fn update_settings(
    State(state): State<AppState>,
    Json(body): Json<UpdateSettingsBody>,
) -> AppResult<Json<DataResponse<LoyaltyProgramSettings>>> {
    validate_settings_patch(&body.patch)?;

    let settings = LoyaltySettingsRepo::upsert(&state.pool, body.salon_id, &body.patch).await?;
    Ok(Json(DataResponse { data: settings }))
}
