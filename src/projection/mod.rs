//! Delay-cost engine and break-even solver

mod break_even;
mod engine;

pub use break_even::{compute_break_even_income, BreakEvenQuery};
pub use engine::{
    compute_delay_cost, describe_mls_tier, resolve_loading, resolve_mls_rate, DelayCostCalculator,
    DelayCostResult, LOADING_COST_FACTOR,
};
