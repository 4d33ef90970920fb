//! Paint color newtype

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::StringExt;
use crate::error::DomainError;

/// A paint color name. Never blank; stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Create a new validated color.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if the color is empty or whitespace only.
    pub fn new(color: impl Into<String>) -> Result<Self, DomainError> {
        let color = color.into();
        if color.is_blank() {
            return Err(DomainError::invalid_value("color cannot be blank"));
        }
        Ok(Self(color))
    }

    /// Returns the color as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.0
    }
}
