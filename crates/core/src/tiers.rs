//! Pure tier resolution and tier input validation.
//!
//! A client's tier is the tier with the greatest `points_threshold` that is
//! less than or equal to their current balance. Resolution is a pure function
//! over pre-loaded tier rows; the repository layer supplies them ordered by
//! threshold ascending.

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length for a tier name.
pub const MAX_TIER_NAME_LENGTH: usize = 100;

/// The fields of a tier row that resolution needs.
///
/// The `db` crate converts its full row struct into this; keeping the
/// resolver on a narrow type lets it be tested without a database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierSpec {
    pub id: DbId,
    pub name: String,
    pub points_threshold: i64,
}

/// Resolve the current tier for a balance.
///
/// Returns the tier with the greatest threshold `<= balance`. Duplicate
/// thresholds are permitted; ties break deterministically on the lowest id.
/// Returns `None` when no tier qualifies (balance below the lowest threshold,
/// or no tiers configured).
pub fn resolve_tier(balance: i64, tiers: &[TierSpec]) -> Option<&TierSpec> {
    tiers
        .iter()
        .filter(|t| t.points_threshold <= balance)
        .max_by(|a, b| {
            a.points_threshold
                .cmp(&b.points_threshold)
                // Prefer the lower id on equal thresholds.
                .then(b.id.cmp(&a.id))
        })
}

/// Validate a tier name.
pub fn validate_tier_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("tier name must not be empty".into()));
    }
    if name.len() > MAX_TIER_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "tier name exceeds maximum length of {MAX_TIER_NAME_LENGTH}"
        )));
    }
    Ok(())
}

/// Validate a tier points threshold.
pub fn validate_tier_threshold(threshold: i64) -> Result<(), CoreError> {
    if threshold < 0 {
        return Err(CoreError::Validation(format!(
            "points_threshold must be >= 0, got {threshold}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(id: DbId, name: &str, threshold: i64) -> TierSpec {
        TierSpec {
            id,
            name: name.to_string(),
            points_threshold: threshold,
        }
    }

    /// Bronze 0 / Silver 100 / Gold 500.
    fn standard_tiers() -> Vec<TierSpec> {
        vec![
            tier(1, "Bronze", 0),
            tier(2, "Silver", 100),
            tier(3, "Gold", 500),
        ]
    }

    // -- resolve_tier ---------------------------------------------------------

    #[test]
    fn balance_between_tiers_resolves_lower() {
        let tiers = standard_tiers();
        assert_eq!(resolve_tier(50, &tiers).unwrap().name, "Bronze");
        assert_eq!(resolve_tier(499, &tiers).unwrap().name, "Silver");
    }

    #[test]
    fn balance_at_threshold_resolves_that_tier() {
        let tiers = standard_tiers();
        assert_eq!(resolve_tier(100, &tiers).unwrap().name, "Silver");
        assert_eq!(resolve_tier(500, &tiers).unwrap().name, "Gold");
    }

    #[test]
    fn zero_balance_resolves_zero_threshold_tier() {
        let tiers = standard_tiers();
        assert_eq!(resolve_tier(0, &tiers).unwrap().name, "Bronze");
    }

    #[test]
    fn balance_above_top_tier_resolves_top() {
        let tiers = standard_tiers();
        assert_eq!(resolve_tier(10_000, &tiers).unwrap().name, "Gold");
    }

    #[test]
    fn no_tiers_resolves_none() {
        assert_eq!(resolve_tier(500, &[]), None);
    }

    #[test]
    fn balance_below_lowest_threshold_resolves_none() {
        let tiers = vec![tier(1, "Silver", 100), tier(2, "Gold", 500)];
        assert_eq!(resolve_tier(50, &tiers), None);
    }

    #[test]
    fn duplicate_thresholds_break_ties_on_lowest_id() {
        let tiers = vec![
            tier(5, "Members", 100),
            tier(2, "Insiders", 100),
            tier(9, "Regulars", 100),
        ];
        assert_eq!(resolve_tier(250, &tiers).unwrap().id, 2);
    }

    #[test]
    fn resolution_independent_of_input_order() {
        let mut tiers = standard_tiers();
        tiers.reverse();
        assert_eq!(resolve_tier(499, &tiers).unwrap().name, "Silver");
    }

    // -- validate_tier_name ---------------------------------------------------

    #[test]
    fn valid_name_accepted() {
        assert!(validate_tier_name("Gold").is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        assert!(validate_tier_name("").is_err());
        assert!(validate_tier_name("  ").is_err());
    }

    #[test]
    fn overlong_name_rejected() {
        let name = "x".repeat(MAX_TIER_NAME_LENGTH + 1);
        assert!(validate_tier_name(&name).is_err());
    }

    // -- validate_tier_threshold ----------------------------------------------

    #[test]
    fn zero_threshold_accepted() {
        assert!(validate_tier_threshold(0).is_ok());
    }

    #[test]
    fn negative_threshold_rejected() {
        assert!(validate_tier_threshold(-1).is_err());
    }
}
