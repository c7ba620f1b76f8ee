//! Null-safety guard
//!
//! Template variables that do not resolve reach helpers as `Value::Null`.
//! Null-safe helpers check their arguments with these functions before doing
//! any work and fall back to a documented result instead of failing.

use serde_json::Value;

/// True iff `value` is the missing sentinel
pub fn is_missing(value: &Value) -> bool {
    value.is_null()
}

/// True iff any of `values` is missing
pub fn any_missing(values: &[Value]) -> bool {
    values.iter().any(is_missing)
}
