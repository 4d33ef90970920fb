//! Readers for untyped JSON arguments.
//!
//! These are the only place where [`DomainError::InvalidType`] originates:
//! each reader either returns the value in its declared type or reports the
//! mismatch. The one range they check is an integer too wide for `i64`,
//! which is an InvalidValue.

use serde_json::Value;

use crate::error::DomainError;

/// Looks up a required field of a JSON object.
///
/// A missing field is a type error, as is a non-object container.
pub fn required<'a>(object: &'a Value, field: &'static str) -> Result<&'a Value, DomainError> {
    optional(object, field)?.ok_or_else(|| DomainError::invalid_type(field, "present"))
}

/// Looks up an optional field of a JSON object.
///
/// An explicit `null` is treated the same as an absent field.
pub fn optional<'a>(
    object: &'a Value,
    field: &'static str,
) -> Result<Option<&'a Value>, DomainError> {
    let Some(map) = object.as_object() else {
        return Err(DomainError::invalid_type("arguments", "a JSON object"));
    };
    Ok(map.get(field).filter(|value| !value.is_null()))
}

/// Reads a text argument.
pub fn text<'a>(value: &'a Value, field: &'static str) -> Result<&'a str, DomainError> {
    value
        .as_str()
        .ok_or_else(|| DomainError::invalid_type(field, "text"))
}

/// Reads a numeric argument. Integers and reals are both accepted; booleans are not.
pub fn number(value: &Value, field: &'static str) -> Result<f64, DomainError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| DomainError::invalid_type(field, "a number")),
        _ => Err(DomainError::invalid_type(field, "a number")),
    }
}

/// Reads an integer argument. A number with a fractional representation is rejected.
///
/// An integer too large for `i64` has the right type but an unusable value.
pub fn integer(value: &Value, field: &'static str) -> Result<i64, DomainError> {
    match value {
        Value::Number(n) if n.is_u64() && !n.is_i64() => Err(DomainError::invalid_value(
            format!("{} is out of range", field),
        )),
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| DomainError::invalid_type(field, "an integer")),
        _ => Err(DomainError::invalid_type(field, "an integer")),
    }
}
