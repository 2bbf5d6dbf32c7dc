//! Primitives layer for typelock
//!
//! Provides the type-locked property machinery:
//! - **PredicateRegistry**: Tag-keyed table of type predicates
//! - **PropertyFactory**: Creates cells whose type is pinned by their initial value
//! - **PropertyCell**: One property's value behind a checked setter
//! - **PropertySetBuilder**: Installs cells for a whole map of initial values
//! - **PropertySet**: The container that owns installed cells
//!
//! ## Write Semantics
//!
//! ```text
//! set(value) → registry predicate for pinned tag → accept | reject
//! ```
//!
//! Accepted writes replace the value unless it is unchanged. Rejected writes
//! keep the old value, log a warning and return normally.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cell;
pub mod property_set;
pub mod registry;

pub use cell::{PropertyCell, PropertyFactory, SetOutcome};
pub use property_set::{PropertySet, PropertySetBuilder};
pub use registry::{Predicate, PredicateRegistry};
