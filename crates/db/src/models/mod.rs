//! Entity models and DTOs.

pub mod loyalty_account;
pub mod loyalty_settings;
pub mod loyalty_tier;
pub mod loyalty_transaction;
pub mod reward;
