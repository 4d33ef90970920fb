//! The dynamic face of a guarded entity.
//!
//! Typed constructors and mutators cover callers that already hold Rust
//! values. [`GuardedEntity`] covers callers holding untyped JSON, where a
//! runtime type mismatch is possible and is always reported before any range
//! check runs.

use serde_json::Value;

use crate::error::DomainError;

/// An entity that can be built and mutated from untyped arguments.
pub trait GuardedEntity: Sized {
    /// Entity name used in errors and log events.
    const ENTITY: &'static str;

    /// Names accepted by [`GuardedEntity::apply`].
    const OPERATIONS: &'static [&'static str];

    /// Builds the entity from a JSON object of named constructor arguments.
    ///
    /// # Errors
    ///
    /// `InvalidType` when a field is missing or has the wrong type,
    /// `InvalidValue` when a field violates an invariant.
    fn from_json(arguments: &Value) -> Result<Self, DomainError>;

    /// Runs the named mutator with a single untyped argument.
    ///
    /// On error the entity is left exactly as it was.
    fn apply(&mut self, operation: &str, argument: &Value) -> Result<(), DomainError>;
}

/// Runs one guarded step and records its outcome.
pub(crate) fn guarded<T>(
    entity: &'static str,
    operation: &str,
    step: impl FnOnce() -> Result<T, DomainError>,
) -> Result<T, DomainError> {
    let result = step();
    match &result {
        Ok(_) => tracing::debug!(entity, operation, "guarded operation applied"),
        Err(err) => tracing::debug!(
            entity,
            operation,
            kind = ?err.kind(),
            error = %err,
            "guarded operation rejected"
        ),
    }
    result
}
