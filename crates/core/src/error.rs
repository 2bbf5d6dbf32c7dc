//! Error types for typelock
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! A write whose value has the wrong type is NOT an error: setters report it
//! through their outcome and a log line instead.

use crate::type_tag::TypeTag;
use std::fmt;
use thiserror::Error;

/// Result type alias for typelock operations
pub type Result<T> = std::result::Result<T, Error>;

/// What an argument was required to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// A finite number
    Number,
    /// A non-empty string
    String,
    /// A non-empty, non-array object
    Object,
    /// A non-empty array
    Array,
    /// A callable
    Function,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Requirement::Number => "a number",
            Requirement::String => "a string or is empty",
            Requirement::Object => "an object or is empty",
            Requirement::Array => "an array or is empty",
            Requirement::Function => "a function",
        })
    }
}

/// Error types for typelock
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A property was declared with a null or undefined initial value
    #[error("Cannot use type {tag} as initial state")]
    InvalidState {
        /// Tag of the offending initial value
        tag: TypeTag,
    },

    /// An argument did not have the required shape
    #[error("Param {} is not {requirement}", describe_param(.param, .actual))]
    InvalidArgument {
        /// Parameter name, when the caller supplied one
        param: Option<String>,
        /// Tag of the value that was passed
        actual: TypeTag,
        /// What the parameter must be
        requirement: Requirement,
    },

    /// No predicate is registered for a type tag
    #[error("No predicate registered for type tag {0}")]
    UnknownTypeTag(TypeTag),

    /// A property set has no property under this name
    #[error("Property not found: {0}")]
    PropertyNotFound(String),
}

fn describe_param(param: &Option<String>, actual: &TypeTag) -> String {
    match param.as_deref() {
        Some(name) if !name.is_empty() => format!("\"{}\" [{}]", name, actual),
        _ => actual.to_string(),
    }
}
