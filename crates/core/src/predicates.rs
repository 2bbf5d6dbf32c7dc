//! Type predicates
//!
//! Pure classifiers over [`Value`]. These are usable on their own and are the
//! building blocks of the standard predicate registry.
//!
//! `check_empty` variants treat empty strings, arrays and objects as NOT
//! matching.

use crate::value::Value;

/// Anything but null and undefined
pub fn exists(value: &Value) -> bool {
    value.exists()
}

/// Same runtime type
///
/// When both values exist their type tags are compared; otherwise the values
/// themselves must be equal (so `null` only matches `null`).
pub fn is_same_type(a: &Value, b: &Value) -> bool {
    if a.exists() && b.exists() {
        a.type_tag() == b.type_tag()
    } else {
        a == b
    }
}

/// Finite number (NaN and infinities are rejected)
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_finite())
}

/// String, optionally non-empty
pub fn is_string(value: &Value, check_empty: bool) -> bool {
    match value {
        Value::String(s) => !check_empty || !s.is_empty(),
        _ => false,
    }
}

/// Boolean
pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

/// Callable
pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

/// Array, optionally non-empty
pub fn is_array(value: &Value, check_empty: bool) -> bool {
    match value {
        Value::Array(items) => !check_empty || !items.is_empty(),
        _ => false,
    }
}

/// Non-array, non-null object of any class, optionally non-empty
pub fn is_object(value: &Value, check_empty: bool) -> bool {
    match value {
        Value::Object(o) => !check_empty || !o.is_empty(),
        _ => false,
    }
}
