//! Runtime type tags
//!
//! A [`TypeTag`] names the runtime category of a [`Value`]. Tags are derived
//! in this order:
//!
//! 1. Nominal identity: the constructor name (`"Number"`, `"String"`,
//!    `"Boolean"`, `"Array"`, `"Function"`, `"Object"`, or a class name)
//! 2. `"null"` for null
//! 3. The primitive kind otherwise (`"undefined"`, or `"object"` for an
//!    object with no prototype)
//!
//! Tags are compared case-sensitively. The predicate registry is keyed by the
//! same strings, so a tag produced here is exactly the lookup key.

use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;

use crate::value::{Object, Value};

/// Name of a runtime value category
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTag(Cow<'static, str>);

impl TypeTag {
    /// Finite and non-finite numbers
    pub const NUMBER: TypeTag = TypeTag(Cow::Borrowed("Number"));
    /// Strings
    pub const STRING: TypeTag = TypeTag(Cow::Borrowed("String"));
    /// Booleans
    pub const BOOLEAN: TypeTag = TypeTag(Cow::Borrowed("Boolean"));
    /// Arrays
    pub const ARRAY: TypeTag = TypeTag(Cow::Borrowed("Array"));
    /// Plain objects
    pub const OBJECT: TypeTag = TypeTag(Cow::Borrowed("Object"));
    /// Callables
    pub const FUNCTION: TypeTag = TypeTag(Cow::Borrowed("Function"));
    /// The null sentinel
    pub const NULL: TypeTag = TypeTag(Cow::Borrowed("null"));
    /// The undefined sentinel
    pub const UNDEFINED: TypeTag = TypeTag(Cow::Borrowed("undefined"));
    /// Objects without a prototype
    pub const BARE_OBJECT: TypeTag = TypeTag(Cow::Borrowed("object"));

    /// Create a tag from any name
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Tag name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TypeTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TypeTag {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for TypeTag {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

/// Derive the type tag of a value
pub fn type_tag_of(value: &Value) -> TypeTag {
    match value {
        Value::Undefined => TypeTag::UNDEFINED,
        Value::Null => TypeTag::NULL,
        Value::Bool(_) => TypeTag::BOOLEAN,
        Value::Number(_) => TypeTag::NUMBER,
        Value::String(_) => TypeTag::STRING,
        Value::Array(_) => TypeTag::ARRAY,
        Value::Function(_) => TypeTag::FUNCTION,
        Value::Object(o) => match o.class_name() {
            Some(Object::PLAIN_CLASS) => TypeTag::OBJECT,
            Some(class) => TypeTag::new(class.to_string()),
            None => TypeTag::BARE_OBJECT,
        },
    }
}
