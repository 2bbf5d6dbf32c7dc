//! Argument guards
//!
//! Each guard checks one argument and fails with
//! [`Error::InvalidArgument`] naming the parameter and the tag of what was
//! passed. Strings, arrays and objects must also be non-empty.

use crate::error::{Error, Requirement, Result};
use crate::predicates::{is_array, is_function, is_number, is_object, is_string};
use crate::value::Value;

fn reject(value: &Value, param: Option<&str>, requirement: Requirement) -> Error {
    Error::InvalidArgument {
        param: param.map(str::to_string),
        actual: value.type_tag(),
        requirement,
    }
}

/// Require a finite number
pub fn ensure_number(value: &Value, param: Option<&str>) -> Result<()> {
    if is_number(value) {
        Ok(())
    } else {
        Err(reject(value, param, Requirement::Number))
    }
}

/// Require a non-empty string
pub fn ensure_string(value: &Value, param: Option<&str>) -> Result<()> {
    if is_string(value, true) {
        Ok(())
    } else {
        Err(reject(value, param, Requirement::String))
    }
}

/// Require a non-empty object
pub fn ensure_object(value: &Value, param: Option<&str>) -> Result<()> {
    if is_object(value, true) {
        Ok(())
    } else {
        Err(reject(value, param, Requirement::Object))
    }
}

/// Require an object, empty or not
///
/// Reports the same error as [`ensure_object`].
pub fn ensure_any_object(value: &Value, param: Option<&str>) -> Result<()> {
    if is_object(value, false) {
        Ok(())
    } else {
        Err(reject(value, param, Requirement::Object))
    }
}

/// Require a non-empty array
pub fn ensure_array(value: &Value, param: Option<&str>) -> Result<()> {
    if is_array(value, true) {
        Ok(())
    } else {
        Err(reject(value, param, Requirement::Array))
    }
}

/// Require a callable
pub fn ensure_function(value: &Value, param: Option<&str>) -> Result<()> {
    if is_function(value) {
        Ok(())
    } else {
        Err(reject(value, param, Requirement::Function))
    }
}
