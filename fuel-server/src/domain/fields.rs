//! Lenient coercion of JSON values into station fields.
//!
//! Clients (and hand-edited data files) sometimes send numbers as strings,
//! so numeric fields accept either a JSON number or a string that parses as
//! one. Non-finite values are rejected because they cannot be written back
//! as JSON.

use serde_json::{Map, Value};

use super::DomainError;

/// Fetch a required field from a JSON object.
pub fn required<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, DomainError> {
    obj.get(field).ok_or(DomainError::MissingField(field))
}

/// Coerce a value to a finite `f64`.
pub fn float(value: &Value, field: &'static str) -> Result<f64, DomainError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|f| f.is_finite())
        .ok_or(DomainError::InvalidField {
            field,
            reason: "expected a number",
        })
}

/// Coerce a value to an integer.
///
/// Accepts JSON integers, floats with no fractional part, and integer strings.
pub fn integer(value: &Value, field: &'static str) -> Result<i64, DomainError> {
    let invalid = DomainError::InvalidField {
        field,
        reason: "expected an integer",
    };

    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
                _ => Err(invalid),
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid),
        _ => Err(invalid),
    }
}

/// Require a string value.
pub fn text(value: &Value, field: &'static str) -> Result<String, DomainError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or(DomainError::InvalidField {
            field,
            reason: "expected a string",
        })
}

/// Coerce an optional number; absent and `null` both mean "not provided".
pub fn optional_float(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<f64>, DomainError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => float(v, field).map(Some),
    }
}
