//! Profile data structures and batch loading

mod data;
pub mod loader;

pub use data::{DelayCostInput, Household, LoadingQuery, MlsRateQuery};
pub use loader::{load_profiles, load_profiles_from_reader};
