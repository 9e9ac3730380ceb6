//! Route definitions for the `/loyalty` resource tree.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{ledger, rewards, settings, tiers};
use crate::state::AppState;

/// Routes mounted at `/loyalty`.
///
/// ```text
/// GET    /accounts                -> get_account (?client_id=&salon_id=)
/// GET    /transactions            -> list_transactions (?client_id=&salon_id=&limit=&offset=)
/// POST   /earn                    -> earn
/// POST   /bonus                   -> grant_bonus
/// POST   /redeem                  -> redeem
///
/// GET    /settings                -> get_settings (?salon_id=)
/// PUT    /settings                -> update_settings
///
/// GET    /tiers                   -> list_tiers (?salon_id=)
/// POST   /tiers                   -> create_tier
/// PUT    /tiers/{id}              -> update_tier (?salon_id=)
/// DELETE /tiers/{id}              -> delete_tier (?salon_id=)
///
/// GET    /rewards                 -> list_rewards (?salon_id=&include_inactive=)
/// POST   /rewards                 -> create_reward
/// PUT    /rewards/{id}            -> update_reward (?salon_id=)
/// DELETE /rewards/{id}            -> deactivate_reward (?salon_id=)
/// POST   /rewards/{id}/redeem     -> redeem_reward
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // Ledger endpoints
        .route("/accounts", get(ledger::get_account))
        .route("/transactions", get(ledger::list_transactions))
        .route("/earn", post(ledger::earn))
        .route("/bonus", post(ledger::grant_bonus))
        .route("/redeem", post(ledger::redeem))
        // Program settings
        .route(
            "/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        // Tier administration
        .route("/tiers", get(tiers::list_tiers).post(tiers::create_tier))
        .route(
            "/tiers/{id}",
            put(tiers::update_tier).delete(tiers::delete_tier),
        )
        // Reward catalog and redemption gate
        .route(
            "/rewards",
            get(rewards::list_rewards).post(rewards::create_reward),
        )
        .route(
            "/rewards/{id}",
            put(rewards::update_reward).delete(rewards::deactivate_reward),
        )
        .route("/rewards/{id}/redeem", post(rewards::redeem_reward))
}
