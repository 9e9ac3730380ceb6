//! Domain logic for the salon loyalty program.
//!
//! This crate has no database or HTTP dependencies. It holds the transaction
//! taxonomy and sign normalization, the pure tier resolver, program-settings
//! validation, pagination clamps, and the shared error type. The `db` and
//! `api` crates build on top of it.

pub mod error;
pub mod ledger;
pub mod pagination;
pub mod settings;
pub mod tiers;
pub mod types;
