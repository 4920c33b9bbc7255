//! Advisory range checks on raw inputs
//!
//! Findings are reported, never raised. Callers decide whether a non-empty
//! report blocks evaluation.

use crate::profile::DelayCostInput;
use serde::{Deserialize, Serialize};

pub const AGE_MESSAGE: &str = "Age must be between 18-100";
pub const INCOME_MESSAGE: &str = "Income cannot be negative";
pub const PREMIUM_MESSAGE: &str = "Premium should be between $500-$10,000";
pub const DELAY_MESSAGE: &str = "Delay years should be between 0-30";

pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 100;
pub const MIN_PREMIUM: f64 = 500.0;
pub const MAX_PREMIUM: f64 = 10_000.0;
pub const MAX_DELAY_YEARS: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationInput {
    pub age: i32,
    pub income: f64,
    pub premium: f64,
    pub delay_years: f64,
}

impl From<&DelayCostInput> for ValidationInput {
    fn from(input: &DelayCostInput) -> Self {
        Self {
            age: input.age,
            income: input.income,
            premium: input.premium,
            delay_years: input.delay_years,
        }
    }
}

/// Run every range check; an empty vector means the input is valid
///
/// Findings are ordered age, income, premium, delay years.
pub fn validate(input: &ValidationInput) -> Vec<String> {
    let mut errors = Vec::new();

    if input.age < MIN_AGE || input.age > MAX_AGE {
        errors.push(AGE_MESSAGE.to_string());
    }

    if input.income < 0.0 {
        errors.push(INCOME_MESSAGE.to_string());
    }

    if input.premium < MIN_PREMIUM || input.premium > MAX_PREMIUM {
        errors.push(PREMIUM_MESSAGE.to_string());
    }

    if input.delay_years < 0.0 || input.delay_years > MAX_DELAY_YEARS {
        errors.push(DELAY_MESSAGE.to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(age: i32, income: f64, premium: f64, delay_years: f64) -> ValidationInput {
        ValidationInput {
            age,
            income,
            premium,
            delay_years,
        }
    }

    #[test]
    fn test_age_range() {
        assert!(validate(&input(17, 100_000.0, 2000.0, 1.0)).contains(&AGE_MESSAGE.to_string()));
        assert!(validate(&input(101, 100_000.0, 2000.0, 1.0)).contains(&AGE_MESSAGE.to_string()));
        assert!(validate(&input(18, 100_000.0, 2000.0, 1.0)).is_empty());
        assert!(validate(&input(100, 100_000.0, 2000.0, 1.0)).is_empty());
    }

    #[test]
    fn test_income_non_negative() {
        assert_eq!(validate(&input(30, -1.0, 2000.0, 1.0)), vec![INCOME_MESSAGE]);
        assert!(validate(&input(30, 0.0, 2000.0, 1.0)).is_empty());
    }

    #[test]
    fn test_premium_range() {
        assert_eq!(validate(&input(30, 100_000.0, 499.0, 1.0)), vec![PREMIUM_MESSAGE]);
        assert_eq!(validate(&input(30, 100_000.0, 10_001.0, 1.0)), vec![PREMIUM_MESSAGE]);
        assert!(validate(&input(30, 100_000.0, 500.0, 1.0)).is_empty());
        assert!(validate(&input(30, 100_000.0, 10_000.0, 1.0)).is_empty());
    }

    #[test]
    fn test_delay_range() {
        assert_eq!(validate(&input(30, 100_000.0, 2000.0, -1.0)), vec![DELAY_MESSAGE]);
        assert_eq!(validate(&input(30, 100_000.0, 2000.0, 31.0)), vec![DELAY_MESSAGE]);
        assert!(validate(&input(30, 100_000.0, 2000.0, 0.0)).is_empty());
        assert!(validate(&input(30, 100_000.0, 2000.0, 30.0)).is_empty());
    }

    #[test]
    fn test_all_checks_run_in_order() {
        let errors = validate(&input(17, -100.0, 100.0, 50.0));
        assert_eq!(
            errors,
            vec![AGE_MESSAGE, INCOME_MESSAGE, PREMIUM_MESSAGE, DELAY_MESSAGE]
        );
    }

    #[test]
    fn test_from_delay_cost_input() {
        let profile = DelayCostInput::new(30, 100_000.0, 2000.0, 5.0);
        assert!(validate(&ValidationInput::from(&profile)).is_empty());
    }
}
