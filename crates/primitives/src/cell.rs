//! PropertyCell: type-locked value cells
//!
//! ## Design Principles
//!
//! 1. **Pinned Type**: A cell's type tag is derived once from its initial
//!    value and never changes.
//! 2. **Checked Writes**: Every write is validated against the predicate
//!    registered for the pinned tag before it replaces the value.
//! 3. **Soft Rejection**: A write of the wrong type is not an error. The old
//!    value stays, a warning is logged, and the setter reports
//!    [`SetOutcome::Rejected`].
//!
//! ## Concurrency
//!
//! The value lives behind a per-cell mutex, so concurrent setters on one cell
//! serialize. Predicates are pure, so the check runs before the lock is taken.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

use typelock_core::{Error, FactoryConfig, Result, TypeTag, Value};

use crate::registry::{Predicate, PredicateRegistry};

/// Result of a write to a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOutcome {
    /// The value was replaced
    Updated,
    /// The candidate equals the current value; nothing was written
    Unchanged,
    /// The candidate has the wrong type; nothing was written
    Rejected {
        /// Pinned tag of the cell
        expected: TypeTag,
        /// Tag of the rejected candidate
        actual: TypeTag,
    },
}

impl SetOutcome {
    /// True unless the write was rejected
    pub fn is_accepted(&self) -> bool {
        !matches!(self, SetOutcome::Rejected { .. })
    }

    /// True if the write was rejected
    pub fn is_rejected(&self) -> bool {
        !self.is_accepted()
    }
}

/// The owned state behind one type-locked property
///
/// The value can only be reached through [`get`](Self::get) and
/// [`set`](Self::set).
pub struct PropertyCell {
    tag: TypeTag,
    predicate: Predicate,
    value: Mutex<Value>,
    config: FactoryConfig,
}

impl PropertyCell {
    /// Pinned type tag
    pub fn tag(&self) -> &TypeTag {
        &self.tag
    }

    /// Current value
    pub fn get(&self) -> Value {
        self.value.lock().clone()
    }

    /// Run `f` on a snapshot of the current value
    ///
    /// The lock is released before `f` runs, so `f` may read or write this
    /// cell again.
    pub fn with_value<R>(&self, f: impl FnOnce(&Value) -> R) -> R {
        let snapshot = self.get();
        f(&snapshot)
    }

    /// True if `candidate` satisfies the pinned type
    pub fn accepts(&self, candidate: &Value) -> bool {
        (self.predicate)(candidate)
    }

    /// Write a new value
    ///
    /// Never fails: a candidate of the wrong type is dropped and reported as
    /// [`SetOutcome::Rejected`].
    pub fn set(&self, candidate: Value) -> SetOutcome {
        if !self.accepts(&candidate) {
            let actual = candidate.type_tag();
            if self.config.log_rejections {
                warn!(
                    target: "typelock::cell",
                    expected = %self.tag,
                    actual = %actual,
                    "Cannot change property type {} with {}",
                    self.tag,
                    actual
                );
            }
            return SetOutcome::Rejected {
                expected: self.tag.clone(),
                actual,
            };
        }

        let mut value = self.value.lock();
        if self.config.suppress_unchanged_writes && *value == candidate {
            return SetOutcome::Unchanged;
        }
        *value = candidate;
        SetOutcome::Updated
    }

    /// Always true: cells are visible when their container is enumerated
    pub fn is_enumerable(&self) -> bool {
        true
    }
}

impl fmt::Debug for PropertyCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyCell")
            .field("tag", &self.tag)
            .field("value", &*self.value.lock())
            .finish()
    }
}

/// Creates type-locked cells
///
/// ## Example
///
/// ```rust
/// use typelock_primitives::{PropertyFactory, SetOutcome};
/// use typelock_core::Value;
///
/// let factory = PropertyFactory::default();
/// let cell = factory.create_cell(Value::from(1))?;
///
/// assert_eq!(cell.set(Value::from(2)), SetOutcome::Updated);
/// assert!(cell.set(Value::from("two")).is_rejected());
/// assert_eq!(cell.get(), Value::from(2));
/// # Ok::<(), typelock_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct PropertyFactory {
    registry: Arc<PredicateRegistry>,
    config: FactoryConfig,
}

impl PropertyFactory {
    /// Create a factory over a registry
    pub fn new(registry: Arc<PredicateRegistry>, config: FactoryConfig) -> Self {
        Self { registry, config }
    }

    /// Predicate registry used to pin cells
    pub fn registry(&self) -> &Arc<PredicateRegistry> {
        &self.registry
    }

    /// Configuration handed to every cell
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Create a cell pinned to the type of `initial`
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidState`] if `initial` is null or undefined
    /// - [`Error::UnknownTypeTag`] if the registry has no predicate for the
    ///   tag of `initial`
    pub fn create_cell(&self, initial: Value) -> Result<PropertyCell> {
        let tag = initial.type_tag();
        if !initial.exists() {
            return Err(Error::InvalidState { tag });
        }
        let predicate = self.registry.lookup(&tag)?;

        Ok(PropertyCell {
            tag,
            predicate,
            value: Mutex::new(initial),
            config: self.config,
        })
    }
}

impl Default for PropertyFactory {
    fn default() -> Self {
        Self::new(Arc::new(PredicateRegistry::standard()), FactoryConfig::default())
    }
}
