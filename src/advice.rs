//! Interpretation of a delay-cost result: outcome, recommendation, warnings

use crate::assumptions::LoadingRules;
use crate::config::AdviceConfig;
use crate::format::{format_currency, format_years};
use crate::profile::DelayCostInput;
use crate::projection::DelayCostResult;
use serde::Serialize;

/// Sign of the net cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Saves,
    Costs,
    BreakEven,
}

impl Outcome {
    pub fn from_net_cost(net_cost: f64) -> Self {
        if net_cost < 0.0 {
            Outcome::Saves
        } else if net_cost > 0.0 {
            Outcome::Costs
        } else {
            Outcome::BreakEven
        }
    }

    pub fn message(&self, net_cost: f64, delay_years: f64) -> String {
        let years = format_years(delay_years);
        match self {
            Outcome::Saves => format!("Delaying {} saves {}", years, format_currency(net_cost)),
            Outcome::Costs => format!(
                "Delaying {} costs {} more",
                years,
                format_currency(net_cost)
            ),
            Outcome::BreakEven => "Break-even: Both options cost the same".to_string(),
        }
    }
}

/// Purchase recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    /// Delaying saves money
    CanWait,
    /// Delaying costs a moderate amount
    Consider,
    /// Delaying costs more than the configured ceiling
    BuyNow,
}

impl Recommendation {
    pub fn classify(net_cost: f64, consider_ceiling: f64) -> Self {
        if net_cost < 0.0 {
            Recommendation::CanWait
        } else if net_cost <= consider_ceiling {
            Recommendation::Consider
        } else {
            Recommendation::BuyNow
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::CanWait => "can-wait",
            Recommendation::Consider => "consider",
            Recommendation::BuyNow => "buy-now",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::CanWait => {
                "You can wait: delaying saves money on pure cost grounds"
            }
            Recommendation::Consider => {
                "Consider buying: delaying costs a moderate amount"
            }
            Recommendation::BuyNow => "Buy now: delaying is significantly more expensive",
        }
    }
}

/// Age-dependent caution shown alongside the numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeWarning {
    /// Under 30: buying before the base age avoids loading entirely
    BuyBeforeThirty,
    /// 30-39
    HealthConsideration,
    /// 40 and over
    HealthRisk,
}

impl AgeWarning {
    pub fn for_age(age: i32) -> Self {
        if age < 30 {
            AgeWarning::BuyBeforeThirty
        } else if age < 40 {
            AgeWarning::HealthConsideration
        } else {
            AgeWarning::HealthRisk
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AgeWarning::BuyBeforeThirty => {
                "Buy before you turn 30 to avoid any Lifetime Health Cover loading"
            }
            AgeWarning::HealthConsideration => {
                "Consider your health needs: the chance of needing hospital care grows over time"
            }
            AgeWarning::HealthRisk => {
                "Health risks increase with age; an uninsured hospital stay may cost more than the premiums saved"
            }
        }
    }
}

pub const WAITING_PERIOD_NOTE: &str =
    "Waiting periods apply from the date you buy cover, so delaying also delays when you can claim";

/// Costs and risks accumulated while waiting
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskFactors {
    pub delay_years: f64,
    /// MLS paid over the delay window
    pub mls_cost: f64,
    /// Loading added by the delay, limited by the loading cap
    pub loading_increase: f64,
    pub waiting_period_note: &'static str,
}

impl RiskFactors {
    pub fn new(rules: &LoadingRules, delay_years: f64, result: &DelayCostResult) -> Self {
        Self {
            delay_years,
            mls_cost: result.mls_cost,
            loading_increase: rules.additional_loading(result.current_loading, delay_years),
            waiting_period_note: WAITING_PERIOD_NOTE,
        }
    }
}

/// Everything a consumer needs to explain one evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub outcome: Outcome,
    pub message: String,
    pub recommendation: Recommendation,
    pub age_warning: AgeWarning,
    pub risk_factors: RiskFactors,
}

pub fn assess(
    input: &DelayCostInput,
    result: &DelayCostResult,
    rules: &LoadingRules,
    config: &AdviceConfig,
) -> Assessment {
    let outcome = Outcome::from_net_cost(result.net_cost);

    Assessment {
        outcome,
        message: outcome.message(result.net_cost, input.delay_years),
        recommendation: Recommendation::classify(result.net_cost, config.consider_ceiling),
        age_warning: AgeWarning::for_age(input.age),
        risk_factors: RiskFactors::new(rules, input.delay_years, result),
    }
}
