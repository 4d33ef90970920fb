//! Model year of a guarded car

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// The first automobile was built in 1886.
pub const FIRST_MODEL_YEAR: i32 = 1886;

/// A validated model year (>= 1886)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct ModelYear(i32);

impl ModelYear {
    /// Create a new validated model year.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if the year is before 1886.
    pub fn new(year: i32) -> Result<Self, DomainError> {
        if year < FIRST_MODEL_YEAR {
            return Err(DomainError::invalid_value(format!(
                "year cannot be earlier than {FIRST_MODEL_YEAR}"
            )));
        }
        Ok(Self(year))
    }

    /// Returns the year as an integer.
    #[inline]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ModelYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for ModelYear {
    type Error = DomainError;

    fn try_from(year: i32) -> Result<Self, Self::Error> {
        Self::new(year)
    }
}

impl From<ModelYear> for i32 {
    fn from(year: ModelYear) -> i32 {
        year.0
    }
}
