//! Hospital Cover - should private hospital insurance be bought now or later?
//!
//! This library provides:
//! - Medicare Levy Surcharge tier lookup (2024-25 thresholds)
//! - Lifetime Health Cover loading accrual
//! - Net cost of delaying purchase and its components
//! - Break-even income, input validation and display formatting
//! - Recommendations and multi-horizon scenario comparison

pub mod advice;
pub mod assumptions;
pub mod batch;
pub mod config;
pub mod error;
pub mod format;
pub mod profile;
pub mod projection;
pub mod scenario;
pub mod validation;

// Re-export commonly used types
pub use advice::{Assessment, Outcome, Recommendation};
pub use assumptions::{Assumptions, MlsTier};
pub use batch::{evaluate_rows, BatchRow};
pub use config::AdviceConfig;
pub use error::{CalculatorError, Result};
pub use format::{format_currency, format_percentage};
pub use profile::{DelayCostInput, LoadingQuery, MlsRateQuery};
pub use projection::{
    compute_break_even_income, compute_delay_cost, describe_mls_tier, resolve_loading,
    resolve_mls_rate, BreakEvenQuery, DelayCostCalculator, DelayCostResult,
};
pub use scenario::{Evaluation, ScenarioComparison, ScenarioRunner};
pub use validation::{validate, ValidationInput};
