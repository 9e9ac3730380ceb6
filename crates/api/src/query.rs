//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication. Every loyalty endpoint is
//! tenant-scoped, so `salon_id` rides along in the query string for reads
//! and id-addressed mutations.

use salonkit_core::types::DbId;
use serde::Deserialize;

/// Tenant scope (`?salon_id=`).
#[derive(Debug, Deserialize)]
pub struct TenantParams {
    pub salon_id: DbId,
}

/// Client scope within a tenant (`?client_id=&salon_id=`).
#[derive(Debug, Deserialize)]
pub struct ClientScopeParams {
    pub client_id: DbId,
    pub salon_id: DbId,
}

/// Client scope plus pagination (`?client_id=&salon_id=&limit=&offset=`).
///
/// Values are clamped in the repository layer via `clamp_limit` /
/// `clamp_offset`.
#[derive(Debug, Deserialize)]
pub struct TransactionListParams {
    pub client_id: DbId,
    pub salon_id: DbId,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Tenant scope with an `include_inactive` flag, used by the reward catalog.
#[derive(Debug, Deserialize)]
pub struct RewardListParams {
    pub salon_id: DbId,
    #[serde(default)]
    pub include_inactive: bool,
}
