//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Ledger mutations (earn, redeem)
//! run as single database transactions so the transaction log and the
//! account aggregates can never diverge.

pub mod loyalty_account_repo;
pub mod loyalty_settings_repo;
pub mod loyalty_tier_repo;
pub mod loyalty_transaction_repo;
pub mod reward_repo;

pub use loyalty_account_repo::{LoyaltyAccountRepo, RedeemOutcome};
pub use loyalty_settings_repo::LoyaltySettingsRepo;
pub use loyalty_tier_repo::LoyaltyTierRepo;
pub use loyalty_transaction_repo::LoyaltyTransactionRepo;
pub use reward_repo::RewardRepo;
