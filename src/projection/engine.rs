//! Delay-cost engine
//!
//! Net additional cost of postponing hospital cover by X years:
//!
//! ```text
//! net = P × X × 0.2 + Income × MLS × X - P × (1 + L₀) × X
//! ```
//!
//! where P is the base premium and L₀ the loading that applies today.

use crate::assumptions::{Assumptions, MlsTier, FY2024_25};
use crate::error::Result;
use crate::profile::{DelayCostInput, LoadingQuery, MlsRateQuery};
use serde::{Deserialize, Serialize};

/// Share of the base premium charged per delay year for the higher future loading
pub const LOADING_COST_FACTOR: f64 = 0.2;

/// Components of a delay-cost evaluation
///
/// `net_cost == loading_cost + mls_cost - saved_premium` holds exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DelayCostResult {
    /// Positive: delaying costs more. Negative: delaying saves money.
    pub net_cost: f64,
    /// Extra future premium from the loading accrued while waiting
    pub loading_cost: f64,
    /// Surcharge paid during the delay window
    pub mls_cost: f64,
    /// Premium (including today's loading) not paid during the delay window
    pub saved_premium: f64,
    pub current_loading: f64,
    pub mls_rate: f64,
}

/// Delay-cost calculator bound to a set of assumptions
#[derive(Debug, Clone)]
pub struct DelayCostCalculator {
    assumptions: Assumptions,
}

impl DelayCostCalculator {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn mls_rate(&self, query: &MlsRateQuery) -> f64 {
        self.assumptions.mls.rate(query)
    }

    pub fn mls_tier(&self, query: &MlsRateQuery) -> MlsTier {
        self.assumptions.mls.tier(query)
    }

    pub fn loading(&self, query: &LoadingQuery) -> Result<f64> {
        self.assumptions.loading.loading(query)
    }

    /// Evaluate the cost of delaying purchase for one profile
    pub fn compute(&self, input: &DelayCostInput) -> Result<DelayCostResult> {
        let mls_rate = self.mls_rate(&input.mls_query());
        let current_loading = self.loading(&input.loading_query())?;

        let x = input.delay_years;
        let p = input.premium;

        // Operation order is part of the contract; do not regroup.
        let loading_cost = p * x * LOADING_COST_FACTOR;
        let mls_cost = input.income * mls_rate * x;
        let saved_premium = p * (1.0 + current_loading) * x;
        let net_cost = loading_cost + mls_cost - saved_premium;

        log::debug!(
            "delay cost: age={} income={} x={} mls_rate={} loading={} net={}",
            input.age,
            input.income,
            x,
            mls_rate,
            current_loading,
            net_cost
        );

        Ok(DelayCostResult {
            net_cost,
            loading_cost,
            mls_cost,
            saved_premium,
            current_loading,
            mls_rate,
        })
    }
}

impl Default for DelayCostCalculator {
    fn default() -> Self {
        Self::new(Assumptions::fy2024_25())
    }
}

/// MLS rate under the 2024-25 thresholds
pub fn resolve_mls_rate(query: &MlsRateQuery) -> f64 {
    FY2024_25.mls.rate(query)
}

/// MLS tier metadata under the 2024-25 thresholds
pub fn describe_mls_tier(query: &MlsRateQuery) -> MlsTier {
    FY2024_25.mls.tier(query)
}

/// Current LHC loading; fails when an immigrant has no Medicare age
pub fn resolve_loading(query: &LoadingQuery) -> Result<f64> {
    FY2024_25.loading.loading(query)
}

/// Delay cost under the 2024-25 assumptions
pub fn compute_delay_cost(input: &DelayCostInput) -> Result<DelayCostResult> {
    DelayCostCalculator::default().compute(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculatorError;

    #[test]
    fn test_young_high_earner() {
        let input = DelayCostInput::new(28, 120_000.0, 2000.0, 2.0);
        let result = compute_delay_cost(&input).unwrap();

        assert_eq!(result.net_cost, -200.0);
        assert_eq!(result.loading_cost, 800.0);
        assert_eq!(result.mls_cost, 3000.0);
        assert_eq!(result.saved_premium, 4000.0);
    }

    #[test]
    fn test_immigrant_family() {
        let input = DelayCostInput::new(42, 150_000.0, 2000.0, 3.0)
            .with_family(0)
            .with_medicare_age(39);
        let result = compute_delay_cost(&input).unwrap();

        assert_eq!(result.net_cost, -5040.0);
        assert_eq!(result.loading_cost, 1200.0);
        assert_eq!(result.mls_cost, 0.0);
        assert_eq!(result.saved_premium, 6240.0);
        assert_eq!(result.current_loading, 0.04);
    }

    #[test]
    fn test_high_income_middle_aged() {
        let input = DelayCostInput::new(45, 180_000.0, 2000.0, 5.0);
        let result = compute_delay_cost(&input).unwrap();

        assert_eq!(result.net_cost, 2500.0);
        assert_eq!(result.loading_cost, 2000.0);
        assert_eq!(result.mls_cost, 13_500.0);
        assert_eq!(result.saved_premium, 13_000.0);
    }

    #[test]
    fn test_single_year_components() {
        let input = DelayCostInput::new(35, 100_000.0, 2000.0, 1.0);
        let result = compute_delay_cost(&input).unwrap();

        let loading = 0.1;
        let rate = 0.01;
        let loading_cost = 2000.0 * 1.0 * 0.2;
        let mls_cost = 100_000.0 * rate * 1.0;
        let saved = 2000.0 * (1.0 + loading) * 1.0;

        assert_eq!(result.current_loading, loading);
        assert_eq!(result.mls_rate, rate);
        assert_eq!(result.loading_cost, loading_cost);
        assert_eq!(result.mls_cost, mls_cost);
        assert_eq!(result.saved_premium, saved);
        assert_eq!(result.net_cost, loading_cost + mls_cost - saved);
    }

    #[test]
    fn test_net_cost_decomposition() {
        let profiles = [
            DelayCostInput::new(18, 0.0, 500.0, 0.0),
            DelayCostInput::new(31, 97_500.0, 1234.56, 7.0),
            DelayCostInput::new(60, 333_333.0, 9999.0, 30.0).with_family(4),
            DelayCostInput::new(55, 210_000.0, 3100.0, 12.0).with_medicare_age(44),
        ];

        for input in &profiles {
            let r = compute_delay_cost(input).unwrap();
            assert_eq!(r.net_cost, r.loading_cost + r.mls_cost - r.saved_premium);
        }
    }

    #[test]
    fn test_components_scale_with_delay() {
        let calc = DelayCostCalculator::default();
        let base = DelayCostInput::new(37, 140_000.0, 2350.0, 3.0).with_family(1);

        let single = calc.compute(&base).unwrap();
        let double = calc.compute(&base.with_delay_years(6.0)).unwrap();

        assert_eq!(double.loading_cost, 2.0 * single.loading_cost);
        assert_eq!(double.mls_cost, 2.0 * single.mls_cost);
        assert_eq!(double.saved_premium, 2.0 * single.saved_premium);
    }

    #[test]
    fn test_zero_delay_is_break_even() {
        let result = compute_delay_cost(&DelayCostInput::new(50, 200_000.0, 2000.0, 0.0)).unwrap();
        assert_eq!(result.net_cost, 0.0);
    }

    #[test]
    fn test_missing_medicare_age_propagates() {
        let mut input = DelayCostInput::new(40, 100_000.0, 2000.0, 1.0);
        input.is_immigrant = true;

        assert!(matches!(
            compute_delay_cost(&input),
            Err(CalculatorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_resolvers_are_idempotent() {
        let mls = MlsRateQuery::family(230_000.0, 2);
        let lhc = LoadingQuery::immigrant(50, 41);

        assert_eq!(resolve_mls_rate(&mls), resolve_mls_rate(&mls));
        assert_eq!(resolve_loading(&lhc), resolve_loading(&lhc));
        assert_eq!(describe_mls_tier(&mls), describe_mls_tier(&mls));
    }
}
