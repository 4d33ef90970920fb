//! Validated numeric amounts used as mutator arguments
//!
//! These newtypes carry the sign check of a guarded operation:
//! - `NonNegativeAmount` accepts zero (distance driven, opening balance)
//! - `PositiveAmount` requires a strictly positive value (money, hours)
//!
//! Both reject NaN and infinities.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

fn ensure_finite(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::invalid_value(format!("{} must be a finite number", field)))
    }
}

// ============================================================================
// NonNegativeAmount
// ============================================================================

/// A finite amount that is zero or greater.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct NonNegativeAmount(f64);

impl NonNegativeAmount {
    /// Zero.
    pub const ZERO: Self = Self(0.0);

    /// Create a new validated amount.
    ///
    /// `field` names the argument in the error message.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if the value is negative or not finite.
    pub fn new(field: &'static str, value: f64) -> Result<Self, DomainError> {
        let value = ensure_finite(field, value)?;
        if value < 0.0 {
            return Err(DomainError::invalid_value(format!("{} cannot be negative", field)));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for NonNegativeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for NonNegativeAmount {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new("amount", value)
    }
}

impl From<NonNegativeAmount> for f64 {
    fn from(amount: NonNegativeAmount) -> f64 {
        amount.0
    }
}

// ============================================================================
// PositiveAmount
// ============================================================================

/// A finite amount strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PositiveAmount(f64);

impl PositiveAmount {
    /// Create a new validated amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if the value is zero, negative, or not finite.
    pub fn new(field: &'static str, value: f64) -> Result<Self, DomainError> {
        let value = ensure_finite(field, value)?;
        if value <= 0.0 {
            return Err(DomainError::invalid_value(format!("{} must be positive", field)));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for PositiveAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for PositiveAmount {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new("amount", value)
    }
}

impl From<PositiveAmount> for f64 {
    fn from(amount: PositiveAmount) -> f64 {
        amount.0
    }
}
