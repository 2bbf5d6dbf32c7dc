//! PropertySet: a container of type-locked properties
//!
//! A [`PropertySet`] owns one [`PropertyCell`] per property name. Cells are
//! never shared between sets and are dropped with their set.
//!
//! [`PropertySetBuilder`] turns a map of initial values into cells and
//! installs them as one batch: every cell is created before any is installed,
//! so a bad value leaves the target untouched.

use std::collections::BTreeMap;
use tracing::{debug, debug_span};

use typelock_core::guards::ensure_any_object;
use typelock_core::{Error, Object, Result, TypeTag, Value};

use crate::cell::{PropertyCell, PropertyFactory, SetOutcome};

/// Name-keyed set of type-locked properties
///
/// Properties enumerate in name order.
#[derive(Debug, Default)]
pub struct PropertySet {
    cells: BTreeMap<String, PropertyCell>,
}

impl PropertySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a property, `None` if there is no such property
    pub fn get(&self, name: &str) -> Option<Value> {
        self.cells.get(name).map(PropertyCell::get)
    }

    /// Write a property
    ///
    /// A value of the wrong type is not an error; see [`SetOutcome`].
    ///
    /// # Errors
    ///
    /// [`Error::PropertyNotFound`] if no property has this name.
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<SetOutcome> {
        let cell = self
            .cells
            .get(name)
            .ok_or_else(|| Error::PropertyNotFound(name.to_string()))?;
        let _span = debug_span!("set_property", property = name).entered();
        Ok(cell.set(value.into()))
    }

    /// The cell behind a property
    pub fn cell(&self, name: &str) -> Option<&PropertyCell> {
        self.cells.get(name)
    }

    /// Pinned tag of a property
    pub fn tag_of(&self, name: &str) -> Option<&TypeTag> {
        self.cells.get(name).map(PropertyCell::tag)
    }

    /// True if a property has this name
    pub fn contains(&self, name: &str) -> bool {
        self.cells.contains_key(name)
    }

    /// Enumerable property names
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells
            .iter()
            .filter(|(_, cell)| cell.is_enumerable())
            .map(|(name, _)| name.as_str())
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the set has no properties
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Plain object holding the current value of every enumerable property
    pub fn snapshot(&self) -> Value {
        Value::Object(
            self.cells
                .iter()
                .filter(|(_, cell)| cell.is_enumerable())
                .map(|(name, cell)| (name.clone(), cell.get()))
                .collect::<Object>(),
        )
    }

    /// Install a batch of cells, replacing any with the same name
    fn install(&mut self, cells: Vec<(String, PropertyCell)>) {
        self.cells.extend(cells);
    }
}

/// Installs type-locked properties from a map of initial values
///
/// ## Example
///
/// ```rust
/// use typelock_primitives::PropertySetBuilder;
/// use typelock_core::Value;
///
/// let builder = PropertySetBuilder::default();
/// let values = Value::from(serde_json::json!({"a": 1, "b": "x"}));
/// let props = builder.install_all(&values, None)?;
///
/// assert!(props.set("a", "y")?.is_rejected());
/// assert_eq!(props.get("a"), Some(Value::from(1)));
/// props.set("a", 2)?;
/// assert_eq!(props.get("a"), Some(Value::from(2)));
/// # Ok::<(), typelock_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertySetBuilder {
    factory: PropertyFactory,
}

impl PropertySetBuilder {
    /// Create a builder over a factory
    pub fn new(factory: PropertyFactory) -> Self {
        Self { factory }
    }

    /// Factory used for each property
    pub fn factory(&self) -> &PropertyFactory {
        &self.factory
    }

    /// Install one property per entry of `values` onto `target`
    ///
    /// Existing properties with the same name are replaced. `values` is not
    /// modified.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `values` is not an object
    /// - any error from [`PropertyFactory::create_cell`]
    ///
    /// On error `target` is left exactly as it was.
    pub fn install_into(&self, values: &Value, target: &mut PropertySet) -> Result<()> {
        ensure_any_object(values, Some("values"))?;

        let cells = values
            .as_object()
            .into_iter()
            .flat_map(Object::iter)
            .map(|(name, initial)| {
                self.factory
                    .create_cell(initial.clone())
                    .map(|cell| (name.to_string(), cell))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            target: "typelock::property_set",
            count = cells.len(),
            "Installing properties"
        );
        target.install(cells);
        Ok(())
    }

    /// Install onto `target`, or onto a fresh set when `target` is `None`,
    /// and return it
    ///
    /// Fails like [`install_into`](Self::install_into). This method owns
    /// `target`, so on error the target is dropped along with the error;
    /// callers that must keep an existing set on failure should call
    /// [`install_into`](Self::install_into) with `&mut` instead.
    pub fn install_all(&self, values: &Value, target: Option<PropertySet>) -> Result<PropertySet> {
        let mut target = target.unwrap_or_default();
        self.install_into(values, &mut target)?;
        Ok(target)
    }

    /// Build a fresh set from `values`
    pub fn build(&self, values: &Value) -> Result<PropertySet> {
        self.install_all(values, None)
    }
}
