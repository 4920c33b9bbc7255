//! Lifetime Health Cover loading rules

use crate::error::{CalculatorError, Result};
use crate::profile::LoadingQuery;

/// LHC loading accrual rules
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingRules {
    /// Base age for Australian-born and childhood immigrants
    pub base_age: i32,
    /// Years after Medicare enrolment before loading accrues for adult immigrants
    pub grace_years: i32,
    /// Loading added per full year without cover
    pub rate_per_year: f64,
    /// Maximum loading
    pub max_loading: f64,
}

impl LoadingRules {
    pub const fn standard() -> Self {
        Self {
            base_age: 30,
            grace_years: 1,
            rate_per_year: 0.02,
            max_loading: 0.7,
        }
    }

    /// Age after which loading accrues
    pub fn base_age_for(&self, query: &LoadingQuery) -> Result<i32> {
        if !query.is_immigrant {
            return Ok(self.base_age);
        }

        match query.medicare_age {
            Some(medicare_age) => Ok(medicare_age.saturating_add(self.grace_years)),
            None => Err(CalculatorError::InvalidInput(
                "medicare_age is required for immigrants".to_string(),
            )),
        }
    }

    /// Current loading for a profile, in [0, max_loading]
    pub fn loading(&self, query: &LoadingQuery) -> Result<f64> {
        let base_age = self.base_age_for(query)?;
        let years_late = query.age.saturating_sub(base_age).max(0);
        let uncapped = years_late as f64 * self.rate_per_year;

        if uncapped >= self.max_loading {
            log::debug!("loading capped at {} for age {}", self.max_loading, query.age);
        }

        Ok(uncapped.min(self.max_loading))
    }

    /// Extra loading accrued by postponing cover, limited by the cap
    pub fn additional_loading(&self, current_loading: f64, delay_years: f64) -> f64 {
        let headroom = (self.max_loading - current_loading).max(0.0);
        (delay_years.max(0.0) * self.rate_per_year).min(headroom)
    }
}

impl Default for LoadingRules {
    fn default() -> Self {
        Self::standard()
    }
}
