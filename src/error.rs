//! Engine error types

use thiserror::Error;

/// Errors raised by the delay-cost engine
///
/// Only structurally required relationships are enforced here. Range checks
/// are advisory and live in [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// A field required by another field's value was missing
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
