//! Predicate registry
//!
//! Maps a [`TypeTag`] to the predicate that decides whether a candidate value
//! belongs to that type. Property cells resolve their predicate here once, at
//! creation.
//!
//! The registry is an open table: `standard()` registers the built-in tags
//! and `register()` adds more (for example a class name) without any change to
//! the factory. Once shared with a factory through an `Arc` it is read-only.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use typelock_core::predicates::{is_array, is_boolean, is_function, is_number, is_object, is_string};
use typelock_core::{Error, Result, TypeTag, Value};

/// Membership test for one type
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Name-keyed table of type predicates
#[derive(Clone)]
pub struct PredicateRegistry {
    entries: HashMap<TypeTag, Predicate>,
}

impl PredicateRegistry {
    /// Registry with no entries
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registry with the built-in tags
    ///
    /// | Tag | Accepts |
    /// |-----|---------|
    /// | Number | finite numbers |
    /// | String | strings |
    /// | Boolean | booleans |
    /// | Array | arrays |
    /// | Object | non-array objects of any class |
    /// | Function | callables |
    pub fn standard() -> Self {
        Self::empty()
            .with(TypeTag::NUMBER, is_number)
            .with(TypeTag::STRING, |v| is_string(v, false))
            .with(TypeTag::BOOLEAN, is_boolean)
            .with(TypeTag::ARRAY, |v| is_array(v, false))
            .with(TypeTag::OBJECT, |v| is_object(v, false))
            .with(TypeTag::FUNCTION, is_function)
    }

    /// Add or replace the predicate for a tag
    pub fn register<F>(&mut self, tag: impl Into<TypeTag>, predicate: F) -> &mut Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.entries.insert(tag.into(), Arc::new(predicate));
        self
    }

    /// Builder-style [`register`](Self::register)
    pub fn with<F>(mut self, tag: impl Into<TypeTag>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.register(tag, predicate);
        self
    }

    /// Predicate for a tag
    ///
    /// A tag without an entry is a configuration fault, never an implicit
    /// accept-all.
    pub fn lookup(&self, tag: &TypeTag) -> Result<Predicate> {
        self.entries
            .get(tag)
            .cloned()
            .ok_or_else(|| Error::UnknownTypeTag(tag.clone()))
    }

    /// True if the tag has a predicate
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Registered tags, sorted
    pub fn tags(&self) -> Vec<&TypeTag> {
        let mut tags: Vec<_> = self.entries.keys().collect();
        tags.sort();
        tags
    }

    /// Number of registered tags
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PredicateRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for PredicateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}
