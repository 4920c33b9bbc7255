//! Profile records consumed by the resolvers and the delay-cost engine

use serde::{Deserialize, Serialize};

/// Household type used for MLS threshold selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Household {
    Single,
    Family,
}

impl Household {
    pub fn from_is_family(is_family: bool) -> Self {
        if is_family {
            Household::Family
        } else {
            Household::Single
        }
    }

    pub fn is_family(&self) -> bool {
        matches!(self, Household::Family)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Household::Single => "Single",
            Household::Family => "Family",
        }
    }
}

/// Income profile relevant to the Medicare Levy Surcharge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MlsRateQuery {
    /// Annual taxable income
    pub income: f64,

    /// Family (couple or single parent) rather than single thresholds
    pub is_family: bool,

    /// Dependent children; each one raises the family thresholds
    #[serde(default)]
    pub num_children: u32,
}

impl MlsRateQuery {
    pub fn single(income: f64) -> Self {
        Self {
            income,
            is_family: false,
            num_children: 0,
        }
    }

    pub fn family(income: f64, num_children: u32) -> Self {
        Self {
            income,
            is_family: true,
            num_children,
        }
    }
}

/// Age profile relevant to Lifetime Health Cover loading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingQuery {
    /// Current age in whole years
    pub age: i32,

    /// Arrived in Australia as an adult
    pub is_immigrant: bool,

    /// Age at Medicare enrolment (required when `is_immigrant`)
    #[serde(default)]
    pub medicare_age: Option<i32>,
}

impl LoadingQuery {
    pub fn native(age: i32) -> Self {
        Self {
            age,
            is_immigrant: false,
            medicare_age: None,
        }
    }

    pub fn immigrant(age: i32, medicare_age: i32) -> Self {
        Self {
            age,
            is_immigrant: true,
            medicare_age: Some(medicare_age),
        }
    }
}

/// Full input to a delay-cost evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayCostInput {
    /// Current age in whole years
    pub age: i32,

    /// Annual taxable income
    pub income: f64,

    /// Base annual hospital premium before loading
    pub premium: f64,

    /// Years the purchase is postponed
    pub delay_years: f64,

    pub is_family: bool,

    pub is_immigrant: bool,

    /// Age at Medicare enrolment (required when `is_immigrant`)
    #[serde(default)]
    pub medicare_age: Option<i32>,

    #[serde(default)]
    pub num_children: u32,
}

impl DelayCostInput {
    /// Single, Australian-born profile
    pub fn new(age: i32, income: f64, premium: f64, delay_years: f64) -> Self {
        Self {
            age,
            income,
            premium,
            delay_years,
            is_family: false,
            is_immigrant: false,
            medicare_age: None,
            num_children: 0,
        }
    }

    /// Switch to family thresholds with the given number of children
    pub fn with_family(mut self, num_children: u32) -> Self {
        self.is_family = true;
        self.num_children = num_children;
        self
    }

    /// Mark as an adult immigrant enrolled in Medicare at `medicare_age`
    pub fn with_medicare_age(mut self, medicare_age: i32) -> Self {
        self.is_immigrant = true;
        self.medicare_age = Some(medicare_age);
        self
    }

    /// Same profile evaluated over a different delay horizon
    pub fn with_delay_years(&self, delay_years: f64) -> Self {
        Self {
            delay_years,
            ..self.clone()
        }
    }

    pub fn household(&self) -> Household {
        Household::from_is_family(self.is_family)
    }

    pub fn mls_query(&self) -> MlsRateQuery {
        MlsRateQuery {
            income: self.income,
            is_family: self.is_family,
            num_children: self.num_children,
        }
    }

    pub fn loading_query(&self) -> LoadingQuery {
        LoadingQuery {
            age: self.age,
            is_immigrant: self.is_immigrant,
            medicare_age: self.medicare_age,
        }
    }
}
