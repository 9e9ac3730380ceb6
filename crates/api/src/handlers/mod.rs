//! HTTP handlers, one module per resource.

pub mod ledger;
pub mod rewards;
pub mod settings;
pub mod tiers;
