//! Handlers for the loyalty ledger: accounts, transactions, earn, bonus,
//! redeem.
//!
//! Validation happens here, before any database work; the balance arithmetic
//! itself is a single database transaction inside `LoyaltyAccountRepo`, so a
//! handler never computes a new balance from a previously read one.

use axum::extract::{Query, State};
use axum::Json;
use salonkit_core::error::CoreError;
use salonkit_core::ledger::{
    validate_description, validate_points, validate_source, TransactionKind,
};
use salonkit_core::settings::points_for_amount;
use salonkit_core::tiers::{resolve_tier, TierSpec};
use salonkit_core::types::DbId;
use salonkit_db::models::loyalty_account::{LoyaltyAccount, PointsMovement};
use salonkit_db::models::loyalty_transaction::LoyaltyTransaction;
use salonkit_db::repositories::{
    LoyaltyAccountRepo, LoyaltySettingsRepo, LoyaltyTierRepo, LoyaltyTransactionRepo,
    RedeemOutcome,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::query::{ClientScopeParams, TransactionListParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Account payload with the client's resolved tier embedded.
#[derive(Debug, Serialize)]
pub struct AccountWithTier {
    #[serde(flatten)]
    pub account: LoyaltyAccount,
    /// Name of the highest tier whose threshold the balance meets, if any.
    pub tier: Option<TierPayload>,
}

#[derive(Debug, Serialize)]
pub struct TierPayload {
    pub id: DbId,
    pub name: String,
    pub points_threshold: i64,
}

impl From<&TierSpec> for TierPayload {
    fn from(spec: &TierSpec) -> Self {
        Self {
            id: spec.id,
            name: spec.name.clone(),
            points_threshold: spec.points_threshold,
        }
    }
}

/// Body for `POST /loyalty/earn`.
///
/// Points are supplied directly or derived from a purchase amount via the
/// salon's configured earn rate; exactly one of `points` and `amount_cents`
/// must be present.
#[derive(Debug, Deserialize)]
pub struct EarnBody {
    pub client_id: DbId,
    pub salon_id: DbId,
    pub points: Option<i64>,
    pub amount_cents: Option<i64>,
    pub source: String,
    pub source_id: Option<DbId>,
    pub description: Option<String>,
}

/// Body for `POST /loyalty/bonus`: grant one of the salon's configured
/// bonuses to a client.
#[derive(Debug, Deserialize)]
pub struct BonusGrant {
    pub client_id: DbId,
    pub salon_id: DbId,
    pub bonus: BonusKind,
}

/// The bonuses a salon configures in its program settings.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusKind {
    Welcome,
    Birthday,
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

/// GET /api/v1/loyalty/accounts?client_id=&salon_id=
///
/// Return the account for a (client, salon) pair with the resolved tier,
/// or 404 if the client has never earned points at this salon.
pub async fn get_account(
    State(state): State<AppState>,
    Query(params): Query<ClientScopeParams>,
) -> AppResult<Json<DataResponse<AccountWithTier>>> {
    let account = LoyaltyAccountRepo::find(&state.pool, params.client_id, params.salon_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "LoyaltyAccount",
            id: params.client_id,
        })?;

    let specs: Vec<TierSpec> = LoyaltyTierRepo::list_for_salon(&state.pool, params.salon_id)
        .await?
        .iter()
        .map(|t| t.to_spec())
        .collect();
    let tier = resolve_tier(account.points_balance, &specs).map(TierPayload::from);

    Ok(Json(DataResponse {
        data: AccountWithTier { account, tier },
    }))
}

/// GET /api/v1/loyalty/transactions?client_id=&salon_id=&limit=&offset=
///
/// List a client's transaction log, most recent first.
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<TransactionListParams>,
) -> AppResult<Json<DataResponse<Vec<LoyaltyTransaction>>>> {
    let transactions = LoyaltyTransactionRepo::list_for_client(
        &state.pool,
        params.client_id,
        params.salon_id,
        params.limit,
        params.offset,
    )
    .await?;

    Ok(Json(DataResponse { data: transactions }))
}

// ---------------------------------------------------------------------------
// Earn / bonus / redeem
// ---------------------------------------------------------------------------

fn validate_movement(movement: &PointsMovement) -> Result<(), CoreError> {
    validate_points(movement.points)?;
    validate_source(&movement.source)?;
    validate_description(movement.description.as_deref())
}

/// POST /api/v1/loyalty/earn
///
/// Credit points to a client's account, creating the account on first earn.
/// With `amount_cents` the point amount is computed from the salon's
/// `points_per_currency_unit` rate (1 when no settings are configured).
pub async fn earn(
    State(state): State<AppState>,
    Json(body): Json<EarnBody>,
) -> AppResult<Json<DataResponse<LoyaltyAccount>>> {
    let points = match (body.points, body.amount_cents) {
        (Some(points), None) => points,
        (None, Some(amount_cents)) => {
            let rate = LoyaltySettingsRepo::find_for_salon(&state.pool, body.salon_id)
                .await?
                .map(|s| s.points_per_currency_unit)
                .unwrap_or(1);
            let points = points_for_amount(amount_cents, rate);
            if points <= 0 {
                return Err(CoreError::Validation(format!(
                    "amount of {amount_cents} cents awards no points at a rate of {rate}"
                ))
                .into());
            }
            points
        }
        (Some(_), Some(_)) => {
            return Err(CoreError::Validation(
                "provide either points or amount_cents, not both".into(),
            )
            .into())
        }
        (None, None) => {
            return Err(
                CoreError::Validation("either points or amount_cents is required".into()).into(),
            )
        }
    };

    let movement = PointsMovement {
        client_id: body.client_id,
        salon_id: body.salon_id,
        points,
        source: body.source,
        source_id: body.source_id,
        description: body.description,
    };
    validate_movement(&movement)?;

    let account =
        LoyaltyAccountRepo::credit(&state.pool, TransactionKind::Earn, &movement).await?;
    Ok(Json(DataResponse { data: account }))
}

/// POST /api/v1/loyalty/bonus
///
/// Grant a configured welcome or birthday bonus. The point amount comes from
/// the salon's program settings; a bonus configured as 0 (or missing
/// settings) cannot be granted.
pub async fn grant_bonus(
    State(state): State<AppState>,
    Json(grant): Json<BonusGrant>,
) -> AppResult<Json<DataResponse<LoyaltyAccount>>> {
    let settings = LoyaltySettingsRepo::find_for_salon(&state.pool, grant.salon_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "LoyaltyProgramSettings",
            id: grant.salon_id,
        })?;

    let (points, source) = match grant.bonus {
        BonusKind::Welcome => (settings.welcome_bonus_points, "welcome_bonus"),
        BonusKind::Birthday => (settings.birthday_bonus_points, "birthday_bonus"),
    };
    if points <= 0 {
        return Err(CoreError::Validation(format!(
            "the {source} is not configured for this salon"
        ))
        .into());
    }

    let movement = PointsMovement {
        client_id: grant.client_id,
        salon_id: grant.salon_id,
        points,
        source: source.to_string(),
        source_id: None,
        description: None,
    };
    let account =
        LoyaltyAccountRepo::credit(&state.pool, TransactionKind::Bonus, &movement).await?;
    Ok(Json(DataResponse { data: account }))
}

/// POST /api/v1/loyalty/redeem
///
/// Debit points from a client's account. Fails with 409 INSUFFICIENT_BALANCE
/// when the account holds fewer points than requested, leaving the log
/// untouched, and 404 when the account does not exist.
pub async fn redeem(
    State(state): State<AppState>,
    Json(movement): Json<PointsMovement>,
) -> AppResult<Json<DataResponse<LoyaltyAccount>>> {
    validate_movement(&movement)?;
    ensure_minimum_redemption(&state, movement.salon_id, movement.points).await?;

    let account = execute_redeem(&state, &movement).await?;
    Ok(Json(DataResponse { data: account }))
}

/// Run a redemption and map the outcome to domain errors.
///
/// Shared with the reward redemption gate in `handlers::rewards`.
pub(crate) async fn execute_redeem(
    state: &AppState,
    movement: &PointsMovement,
) -> Result<LoyaltyAccount, crate::error::AppError> {
    match LoyaltyAccountRepo::redeem(&state.pool, movement).await? {
        RedeemOutcome::Redeemed(account) => Ok(account),
        RedeemOutcome::InsufficientBalance { available } => {
            Err(CoreError::InsufficientBalance {
                available,
                requested: movement.points,
            }
            .into())
        }
        RedeemOutcome::NoAccount => Err(CoreError::NotFound {
            entity: "LoyaltyAccount",
            id: movement.client_id,
        }
        .into()),
    }
}

/// Reject redemptions below the salon's configured minimum.
pub(crate) async fn ensure_minimum_redemption(
    state: &AppState,
    salon_id: DbId,
    points: i64,
) -> Result<(), crate::error::AppError> {
    if let Some(settings) = LoyaltySettingsRepo::find_for_salon(&state.pool, salon_id).await? {
        if points < settings.minimum_redemption_points {
            return Err(CoreError::Validation(format!(
                "redemption of {points} points is below the minimum of {}",
                settings.minimum_redemption_points
            ))
            .into());
        }
    }
    Ok(())
}
