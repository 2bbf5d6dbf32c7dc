//! Value types for typelock
//!
//! This module defines:
//! - Value: Unified enum for every runtime value a property can hold
//! - Object: Ordered field map with an optional nominal class name
//! - Function: Named shared callable
//!
//! ## Value Model
//!
//! The Value enum has exactly 8 variants:
//! - Undefined, Null, Bool, Number, String, Array, Object, Function
//!
//! ### Equality Rules
//!
//! - Different variants are NEVER equal (`Null != Undefined`)
//! - Numbers use IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
//! - Arrays and objects compare structurally (objects also compare class names)
//! - Functions compare by identity: two clones of one `Function` are equal,
//!   two separately built functions never are

use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::type_tag::{type_tag_of, TypeTag};

/// Signature of the body behind a [`Function`]
pub type Callable = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A named callable value
///
/// Cloning shares the body; equality is identity of that body.
#[derive(Clone)]
pub struct Function {
    name: String,
    body: Arc<Callable>,
}

impl Function {
    /// Create a function from a name and a body
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            body: Arc::new(body),
        }
    }

    /// Function name (may be empty for anonymous functions)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the body
    pub fn call(&self, args: &[Value]) -> Value {
        (self.body)(args)
    }

    /// True if both handles share the same body
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Object with string keys and an optional nominal class
///
/// `class` is the constructor name the object reports: `"Object"` for plain
/// objects, the class name for instances, and `None` for objects created
/// without a prototype.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    class: Option<String>,
    fields: BTreeMap<String, Value>,
}

impl Object {
    /// Class name of plain objects
    pub const PLAIN_CLASS: &'static str = "Object";

    /// Create an empty plain object
    pub fn new() -> Self {
        Self {
            class: Some(Self::PLAIN_CLASS.to_string()),
            fields: BTreeMap::new(),
        }
    }

    /// Create an empty instance of a named class
    pub fn instance_of(class: impl Into<String>) -> Self {
        Self {
            class: Some(class.into()),
            fields: BTreeMap::new(),
        }
    }

    /// Create an empty object with no prototype (and so no class name)
    pub fn without_prototype() -> Self {
        Self {
            class: None,
            fields: BTreeMap::new(),
        }
    }

    /// Class name, if the object has one
    pub fn class_name(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Builder-style insert
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Insert a field, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Get a field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the object has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in enumeration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Fields in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (k, v) in iter {
            object.insert(k, v);
        }
        object
    }
}

/// Runtime value held by a property
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    Undefined,
    /// Explicit null
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit floating point number (IEEE-754)
    Number(f64),
    /// UTF-8 string
    String(String),
    /// Array of values
    Array(Vec<Value>),
    /// Object with string keys
    Object(Object),
    /// Callable
    Function(Function),
}

impl Value {
    /// Runtime type tag of this value
    pub fn type_tag(&self) -> TypeTag {
        type_tag_of(self)
    }

    /// Check if this is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if this is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Anything but null and undefined
    pub fn exists(&self) -> bool {
        !matches!(self, Value::Undefined | Value::Null)
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as f64 if this is a Number value
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as &[Value] if this is an Array value
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get as &Object if this is an Object value
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get as &Function if this is a Function value
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Convert to JSON
    ///
    /// Returns `None` for values with no JSON form (undefined, functions).
    /// Inside arrays those become `null`; inside objects the field is dropped.
    /// Non-finite numbers become `null`.
    pub fn to_json(&self) -> Option<JsonValue> {
        match self {
            Value::Undefined | Value::Function(_) => None,
            Value::Null => Some(JsonValue::Null),
            Value::Bool(b) => Some(JsonValue::Bool(*b)),
            Value::Number(n) => Some(
                serde_json::Number::from_f64(*n)
                    .map(JsonValue::Number)
                    .unwrap_or(JsonValue::Null),
            ),
            Value::String(s) => Some(JsonValue::String(s.clone())),
            Value::Array(items) => Some(JsonValue::Array(
                items
                    .iter()
                    .map(|v| v.to_json().unwrap_or(JsonValue::Null))
                    .collect(),
            )),
            Value::Object(o) => Some(JsonValue::Object(
                o.iter()
                    .filter_map(|(k, v)| v.to_json().map(|j| (k.to_string(), j)))
                    .collect(),
            )),
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => Value::Object(map.into_iter().collect()),
        }
    }
}
