//! Break-even income
//!
//! Solves `net = 0` for income with the delay horizon cancelled out:
//! `Income = P × (1 + L₀ - 0.2) / MLS`.

use super::engine::{DelayCostResult, LOADING_COST_FACTOR};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenQuery {
    pub premium: f64,
    pub current_loading: f64,
    pub mls_rate: f64,
}

impl BreakEvenQuery {
    /// Query matching an evaluated profile
    pub fn from_result(premium: f64, result: &DelayCostResult) -> Self {
        Self {
            premium,
            current_loading: result.current_loading,
            mls_rate: result.mls_rate,
        }
    }
}

/// Income above which delaying costs money
///
/// Returns positive infinity when no surcharge applies, since delaying
/// then never costs more on these economics alone.
pub fn compute_break_even_income(query: &BreakEvenQuery) -> f64 {
    if query.mls_rate == 0.0 {
        log::debug!("no MLS at this tier, break-even income is unbounded");
        return f64::INFINITY;
    }

    query.premium * (1.0 + query.current_loading - LOADING_COST_FACTOR) / query.mls_rate
}
