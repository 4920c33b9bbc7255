//! Scenario runner for evaluating profiles across delay horizons
//!
//! Holds the assumptions and advice config once, then evaluates any number
//! of profiles or horizons against them.

use crate::advice::{assess, Assessment, Recommendation};
use crate::assumptions::{Assumptions, MlsTier};
use crate::config::AdviceConfig;
use crate::error::Result;
use crate::format::format_years;
use crate::profile::DelayCostInput;
use crate::projection::{
    compute_break_even_income, BreakEvenQuery, DelayCostCalculator, DelayCostResult,
};
use crate::validation::{validate, ValidationInput};
use rayon::prelude::*;
use serde::Serialize;

/// Full evaluation of one profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub input: DelayCostInput,
    /// Advisory range findings; evaluation proceeds regardless
    pub validation: Vec<String>,
    pub mls_tier: MlsTier,
    pub result: DelayCostResult,
    pub assessment: Assessment,
    /// `None` when no surcharge applies and the break-even income is unbounded
    pub break_even_income: Option<f64>,
}

/// One row of a delay-horizon comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioRow {
    pub delay_years: f64,
    pub label: String,
    pub result: DelayCostResult,
    pub recommendation: Recommendation,
}

/// Same profile evaluated at several delay horizons
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioComparison {
    pub rows: Vec<ScenarioRow>,
    /// Row with the lowest net cost (first on ties)
    pub best_index: Option<usize>,
}

impl ScenarioComparison {
    pub fn best(&self) -> Option<&ScenarioRow> {
        self.best_index.and_then(|i| self.rows.get(i))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    calculator: DelayCostCalculator,
    config: AdviceConfig,
}

impl ScenarioRunner {
    /// Runner with 2024-25 assumptions and default advice config
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AdviceConfig) -> Self {
        Self {
            calculator: DelayCostCalculator::default(),
            config,
        }
    }

    pub fn with_assumptions(assumptions: Assumptions, config: AdviceConfig) -> Self {
        Self {
            calculator: DelayCostCalculator::new(assumptions),
            config,
        }
    }

    pub fn config(&self) -> &AdviceConfig {
        &self.config
    }

    pub fn calculator(&self) -> &DelayCostCalculator {
        &self.calculator
    }

    /// Delay cost only
    pub fn run(&self, input: &DelayCostInput) -> Result<DelayCostResult> {
        self.calculator.compute(input)
    }

    /// Delay cost for many profiles, evaluated in parallel, in input order
    pub fn run_batch(&self, inputs: &[DelayCostInput]) -> Vec<Result<DelayCostResult>> {
        inputs.par_iter().map(|input| self.run(input)).collect()
    }

    /// Validation, tier, delay cost, advice and break-even for one profile
    pub fn evaluate(&self, input: &DelayCostInput) -> Result<Evaluation> {
        let validation = validate(&ValidationInput::from(input));
        if !validation.is_empty() {
            log::warn!("input failed {} range check(s): {:?}", validation.len(), validation);
        }

        let result = self.calculator.compute(input)?;
        let mls_tier = self.calculator.mls_tier(&input.mls_query());
        let assessment = assess(
            input,
            &result,
            &self.calculator.assumptions().loading,
            &self.config,
        );
        let break_even =
            compute_break_even_income(&BreakEvenQuery::from_result(input.premium, &result));

        Ok(Evaluation {
            input: input.clone(),
            validation,
            mls_tier,
            result,
            assessment,
            break_even_income: break_even.is_finite().then_some(break_even),
        })
    }

    /// Evaluate the profile at each configured horizon
    pub fn compare(&self, input: &DelayCostInput) -> Result<ScenarioComparison> {
        self.compare_horizons(input, &self.config.comparison_horizons)
    }

    pub fn compare_horizons(
        &self,
        input: &DelayCostInput,
        horizons: &[f64],
    ) -> Result<ScenarioComparison> {
        let mut rows = Vec::with_capacity(horizons.len());

        for &delay_years in horizons {
            let result = self.calculator.compute(&input.with_delay_years(delay_years))?;
            rows.push(ScenarioRow {
                delay_years,
                label: format_years(delay_years),
                result,
                recommendation: Recommendation::classify(
                    result.net_cost,
                    self.config.consider_ceiling,
                ),
            });
        }

        let best_index = rows
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, row)| match best {
                Some((_, lowest)) if lowest <= row.result.net_cost => best,
                _ => Some((i, row.result.net_cost)),
            })
            .map(|(i, _)| i);

        Ok(ScenarioComparison { rows, best_index })
    }
}
