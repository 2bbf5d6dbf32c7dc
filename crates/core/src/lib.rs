//! Core types for typelock
//!
//! This crate defines the foundational types used throughout the system:
//! - Value: Dynamic value model (undefined, null, bool, number, string,
//!   array, object, function)
//! - TypeTag: Runtime type name derived from a value
//! - Predicates: Pure type classifiers (is_number, is_object, ...)
//! - Guards: Argument checks that fail with a descriptive error
//! - Error: Error type hierarchy
//! - FactoryConfig: Behavior switches for property cells

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod guards;
pub mod predicates;
pub mod type_tag;
pub mod value;

// Re-export commonly used types
pub use config::FactoryConfig;
pub use error::{Error, Requirement, Result};
pub use type_tag::{type_tag_of, TypeTag};
pub use value::{Callable, Function, Object, Value};
