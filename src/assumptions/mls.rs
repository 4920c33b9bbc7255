//! Medicare Levy Surcharge thresholds and rate tiers (2024-25 financial year)

use crate::profile::MlsRateQuery;
use serde::Serialize;

/// Number of MLS tiers (base tier plus three surcharge tiers)
pub const TIER_COUNT: usize = 4;

/// MLS tier schedule
///
/// Thresholds are inclusive upper bounds: an income equal to a threshold
/// stays in the lower tier.
#[derive(Debug, Clone, PartialEq)]
pub struct MlsSchedule {
    /// Upper bounds of tiers 0-2 for singles
    single_thresholds: [f64; TIER_COUNT - 1],
    /// Upper bounds of tiers 0-2 for families, before child adjustment
    family_thresholds: [f64; TIER_COUNT - 1],
    /// Amount added to every family threshold per dependent child
    child_adjustment: f64,
    /// Surcharge rate by tier
    rates: [f64; TIER_COUNT],
}

/// Tier lookup result with the income range it covers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MlsTier {
    pub rate: f64,
    pub tier_index: usize,
    /// First whole dollar of the tier (0 for tier 0)
    pub range_start: f64,
    /// Last dollar of the tier; infinite for the top tier
    pub range_end: f64,
}

impl MlsTier {
    pub fn is_top_tier(&self) -> bool {
        self.tier_index == TIER_COUNT - 1
    }
}

impl MlsSchedule {
    /// Thresholds for the 2024-25 financial year
    pub const fn fy2024_25() -> Self {
        Self {
            single_thresholds: [97_000.0, 113_000.0, 151_000.0],
            family_thresholds: [194_000.0, 226_000.0, 302_000.0],
            child_adjustment: 1_500.0,
            rates: [0.0, 0.01, 0.0125, 0.015],
        }
    }

    /// Tier upper bounds for a household
    ///
    /// Every child raises the family bounds; single bounds never move.
    pub fn thresholds(&self, is_family: bool, num_children: u32) -> [f64; TIER_COUNT - 1] {
        if is_family {
            let adjustment = num_children as f64 * self.child_adjustment;
            self.family_thresholds.map(|t| t + adjustment)
        } else {
            self.single_thresholds
        }
    }

    /// Surcharge rate for a tier index (clamped to the top tier)
    pub fn rate_for_tier(&self, tier_index: usize) -> f64 {
        self.rates[tier_index.min(TIER_COUNT - 1)]
    }

    /// Index of the tier an income falls into
    pub fn tier_index(&self, query: &MlsRateQuery) -> usize {
        self.thresholds(query.is_family, query.num_children)
            .iter()
            .position(|&upper| query.income <= upper)
            .unwrap_or(TIER_COUNT - 1)
    }

    /// Surcharge rate for an income profile
    pub fn rate(&self, query: &MlsRateQuery) -> f64 {
        self.rate_for_tier(self.tier_index(query))
    }

    /// Tier metadata for display, derived from the same thresholds as [`Self::rate`]
    pub fn tier(&self, query: &MlsRateQuery) -> MlsTier {
        let thresholds = self.thresholds(query.is_family, query.num_children);
        let tier_index = self.tier_index(query);

        let range_start = if tier_index == 0 {
            0.0
        } else {
            thresholds[tier_index - 1] + 1.0
        };
        let range_end = thresholds.get(tier_index).copied().unwrap_or(f64::INFINITY);

        if tier_index == TIER_COUNT - 1 {
            log::debug!("income {} is in the top MLS tier", query.income);
        }

        MlsTier {
            rate: self.rate_for_tier(tier_index),
            tier_index,
            range_start,
            range_end,
        }
    }
}

impl Default for MlsSchedule {
    fn default() -> Self {
        Self::fy2024_25()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tiers() {
        let mls = MlsSchedule::fy2024_25();

        assert_eq!(mls.rate(&MlsRateQuery::single(50_000.0)), 0.0);
        assert_eq!(mls.rate(&MlsRateQuery::single(97_000.0)), 0.0);
        assert_eq!(mls.rate(&MlsRateQuery::single(97_001.0)), 0.01);
        assert_eq!(mls.rate(&MlsRateQuery::single(113_000.0)), 0.01);
        assert_eq!(mls.rate(&MlsRateQuery::single(113_001.0)), 0.0125);
        assert_eq!(mls.rate(&MlsRateQuery::single(151_000.0)), 0.0125);
        assert_eq!(mls.rate(&MlsRateQuery::single(151_001.0)), 0.015);
        assert_eq!(mls.rate(&MlsRateQuery::single(250_000.0)), 0.015);
    }

    #[test]
    fn test_family_tiers() {
        let mls = MlsSchedule::fy2024_25();

        assert_eq!(mls.rate(&MlsRateQuery::family(194_000.0, 0)), 0.0);
        assert_eq!(mls.rate(&MlsRateQuery::family(194_001.0, 0)), 0.01);
        assert_eq!(mls.rate(&MlsRateQuery::family(226_000.0, 0)), 0.01);
        assert_eq!(mls.rate(&MlsRateQuery::family(226_001.0, 0)), 0.0125);
        assert_eq!(mls.rate(&MlsRateQuery::family(302_000.0, 0)), 0.0125);
        assert_eq!(mls.rate(&MlsRateQuery::family(302_001.0, 0)), 0.015);
    }

    #[test]
    fn test_child_adjustment_applies_per_child() {
        let mls = MlsSchedule::fy2024_25();

        // One child: 194,000 + 1,500
        assert_eq!(mls.rate(&MlsRateQuery::family(195_000.0, 1)), 0.0);
        assert_eq!(mls.rate(&MlsRateQuery::family(195_501.0, 1)), 0.01);

        // Two children: 194,000 + 3,000
        assert_eq!(mls.rate(&MlsRateQuery::family(197_000.0, 2)), 0.0);
        assert_eq!(mls.rate(&MlsRateQuery::family(197_001.0, 2)), 0.01);
    }

    #[test]
    fn test_children_ignored_for_singles() {
        let mls = MlsSchedule::fy2024_25();
        let query = MlsRateQuery {
            income: 98_000.0,
            is_family: false,
            num_children: 3,
        };

        assert_eq!(mls.rate(&query), 0.01);
    }

    #[test]
    fn test_negative_income_is_tier_zero() {
        let mls = MlsSchedule::fy2024_25();
        assert_eq!(mls.tier_index(&MlsRateQuery::single(-1_000.0)), 0);
    }

    #[test]
    fn test_tier_metadata() {
        let mls = MlsSchedule::fy2024_25();

        let tier = mls.tier(&MlsRateQuery::single(120_000.0));
        assert_eq!(tier.tier_index, 2);
        assert_eq!(tier.rate, 0.0125);
        assert_eq!(tier.range_start, 113_001.0);
        assert_eq!(tier.range_end, 151_000.0);

        let base = mls.tier(&MlsRateQuery::single(10_000.0));
        assert_eq!(base.range_start, 0.0);
        assert_eq!(base.range_end, 97_000.0);

        let top = mls.tier(&MlsRateQuery::family(400_000.0, 2));
        assert!(top.is_top_tier());
        assert_eq!(top.range_start, 305_001.0);
        assert!(top.range_end.is_infinite());
    }

    #[test]
    fn test_tier_agrees_with_rate() {
        let mls = MlsSchedule::fy2024_25();

        for income in [0.0, 97_000.0, 97_001.0, 150_000.0, 200_000.0, 302_001.0] {
            for query in [MlsRateQuery::single(income), MlsRateQuery::family(income, 1)] {
                assert_eq!(mls.tier(&query).rate, mls.rate(&query));
            }
        }
    }
}
