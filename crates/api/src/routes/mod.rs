pub mod health;
pub mod loyalty;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /loyalty/accounts                    account + resolved tier (GET)
/// /loyalty/transactions                transaction log (GET, paginated)
/// /loyalty/earn                        credit points (POST)
/// /loyalty/redeem                      debit points (POST)
/// /loyalty/settings                    program settings (GET, PUT)
/// /loyalty/tiers                       list, create
/// /loyalty/tiers/{id}                  update, delete
/// /loyalty/rewards                     list, create
/// /loyalty/rewards/{id}                update, deactivate
/// /loyalty/rewards/{id}/redeem         redemption gate (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/loyalty", loyalty::router())
}
