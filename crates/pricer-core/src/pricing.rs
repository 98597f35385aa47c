//! Percentage price adjustments and monetary rounding.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Smallest accepted adjustment, in percent.
pub const MIN_PERCENTAGE: f64 = 0.0;
/// Largest accepted adjustment, in percent.
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Round a monetary amount to two decimal places.
#[must_use]
pub fn round_price(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A validated percentage increase in the inclusive range `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PriceAdjustment(f64);

impl PriceAdjustment {
    /// Validate a raw percentage.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if `percentage` is not finite or
    /// falls outside `[0, 100]`.
    pub fn new(percentage: f64) -> Result<Self, CoreError> {
        if !percentage.is_finite() || !(MIN_PERCENTAGE..=MAX_PERCENTAGE).contains(&percentage) {
            return Err(CoreError::invalid(format!(
                "percentage must be between 0 and 100, got {percentage}"
            )));
        }
        Ok(Self(percentage))
    }

    #[must_use]
    pub const fn percentage(self) -> f64 {
        self.0
    }

    /// `price * (1 + percentage / 100)`, rounded to two decimals.
    #[must_use]
    pub fn apply(self, price: f64) -> f64 {
        round_price(price * (1.0 + self.0 / 100.0))
    }
}

impl TryFrom<f64> for PriceAdjustment {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PriceAdjustment> for f64 {
    fn from(value: PriceAdjustment) -> Self {
        value.0
    }
}
