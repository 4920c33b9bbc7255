//! Regulatory assumptions: MLS tiers and LHC loading rules

mod loading;
mod mls;

pub use loading::LoadingRules;
pub use mls::{MlsSchedule, MlsTier, TIER_COUNT};

/// Container for all rate assumptions
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    pub mls: MlsSchedule,
    pub loading: LoadingRules,
}

/// The only supported financial year
pub const FY2024_25: Assumptions = Assumptions::fy2024_25();

impl Assumptions {
    /// Assumptions for the 2024-25 financial year
    pub const fn fy2024_25() -> Self {
        Self {
            mls: MlsSchedule::fy2024_25(),
            loading: LoadingRules::standard(),
        }
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::fy2024_25()
    }
}
