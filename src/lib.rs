//! typelock - properties whose runtime type is pinned at creation
//!
//! Each property takes its type from its first value. Later writes of another
//! type are refused: the old value stays and a warning is logged.
//!
//! # Quick Start
//!
//! ```
//! use typelock::{install_all, Value};
//!
//! let props = install_all(&Value::from(serde_json::json!({"a": 1, "b": "x"})), None)?;
//!
//! props.set("a", "y")?; // rejected, `a` is a Number
//! assert_eq!(props.get("a"), Some(Value::from(1)));
//!
//! props.set("a", 2)?;
//! assert_eq!(props.get("a"), Some(Value::from(2)));
//! # Ok::<(), typelock::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `typelock-core`: value model, type tags, predicates, guards, errors, config
//! - `typelock-primitives`: registry, cells, property sets

pub use typelock_core::*;
pub use typelock_primitives::*;

/// Create one type-locked cell with the standard registry
pub fn create_cell(initial: impl Into<Value>) -> Result<PropertyCell> {
    PropertyFactory::default().create_cell(initial.into())
}

/// Install type-locked properties with the standard registry
///
/// See [`PropertySetBuilder::install_all`].
pub fn install_all(values: &Value, target: Option<PropertySet>) -> Result<PropertySet> {
    PropertySetBuilder::default().install_all(values, target)
}

/// Build type-locked properties from a JSON object
pub fn from_json(values: serde_json::Value) -> Result<PropertySet> {
    install_all(&Value::from(values), None)
}
