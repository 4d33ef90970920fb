//! Unified error types for the domain layer
//!
//! Every guarded operation reports failures through [`DomainError`], so callers
//! can branch on the category without parsing messages.

use thiserror::Error;

/// Coarse category of a [`DomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The argument had the wrong runtime type.
    InvalidType,
    /// The argument had the right type but broke an invariant.
    InvalidValue,
    /// A dynamic operation name was not recognised.
    UnknownOperation,
}

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Argument type does not match the field's declared type
    #[error("Invalid type: {field} must be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// Argument type is correct but the value violates an invariant
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Dynamic dispatch asked for an operation the entity does not expose
    #[error("Unknown operation: {entity} has no operation '{operation}'")]
    UnknownOperation {
        entity: &'static str,
        operation: String,
    },
}

impl DomainError {
    /// Creates a type error for a field.
    ///
    /// Use this when an untyped argument cannot be read as the field's type:
    /// - A number was supplied where text is required
    /// - A fractional number was supplied where an integer is required
    /// - A required field is missing
    ///
    /// # Example
    /// ```ignore
    /// let Some(make) = value.as_str() else {
    ///     return Err(DomainError::invalid_type("make", "text"));
    /// };
    /// ```
    pub fn invalid_type(field: &'static str, expected: &'static str) -> Self {
        Self::InvalidType { field, expected }
    }

    /// Creates a value error for invariant violations.
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// Create an unknown operation error
    pub fn unknown_operation(entity: &'static str, operation: impl Into<String>) -> Self {
        Self::UnknownOperation {
            entity,
            operation: operation.into(),
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidType { .. } => ErrorKind::InvalidType,
            Self::InvalidValue(_) => ErrorKind::InvalidValue,
            Self::UnknownOperation { .. } => ErrorKind::UnknownOperation,
        }
    }
}
