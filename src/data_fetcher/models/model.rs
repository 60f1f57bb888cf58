//! Attribute-style view over decoded JSON mappings.
//!
//! A [`Model`] is built once from a `serde_json` object and never changes
//! afterwards. Every key of the object becomes an attribute reachable through
//! [`Model::get`]; nested objects become nested models and arrays keep their
//! order with object elements wrapped the same way.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// A single attribute of a [`Model`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Attr {
    /// Null, boolean, number or string, kept exactly as decoded
    Scalar(Value),
    /// A nested mapping
    Model(Model),
    /// An ordered sequence, mapping elements wrapped
    Array(Vec<Attr>),
}

impl Attr {
    /// Wraps a decoded value. Nested mappings are named after `name`.
    pub fn from_value(name: &str, value: Value) -> Self {
        match value {
            Value::Object(map) => Attr::Model(Model::wrap(name, map)),
            Value::Array(items) => Attr::Array(
                items
                    .into_iter()
                    .map(|item| Attr::from_value(name, item))
                    .collect(),
            ),
            scalar => Attr::Scalar(scalar),
        }
    }

    /// Rebuilds the JSON value this attribute was created from
    pub fn to_value(&self) -> Value {
        match self {
            Attr::Scalar(value) => value.clone(),
            Attr::Model(model) => model.to_value(),
            Attr::Array(items) => Value::Array(items.iter().map(Attr::to_value).collect()),
        }
    }

    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Attr::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Value::as_str)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Value::as_i64)
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_scalar().and_then(Value::as_u64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Value::as_f64)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Value::as_bool)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Attr::Scalar(Value::Null))
    }

    pub fn as_model(&self) -> Option<&Model> {
        match self {
            Attr::Model(model) => Some(model),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Attr]> {
        match self {
            Attr::Array(items) => Some(items),
            _ => None,
        }
    }
}

/// Structural comparison against a plain JSON value, without rebuilding it.
impl PartialEq<Value> for Attr {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Attr::Scalar(value), other) => value == other,
            (Attr::Model(model), Value::Object(map)) => model == map,
            (Attr::Array(items), Value::Array(values)) => {
                items.len() == values.len() && items.iter().zip(values).all(|(a, v)| a == v)
            }
            _ => false,
        }
    }
}

/// A named, read-only view over a decoded JSON mapping.
///
/// Attribute names are whatever keys the service returned; no schema is
/// applied. The model's own name is kept apart from its attributes, so a key
/// can never shadow it.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    name: String,
    fields: Vec<(String, Attr)>,
}

impl Model {
    /// Wraps a decoded mapping. Total over any JSON object.
    pub fn wrap(name: impl Into<String>, map: Map<String, Value>) -> Self {
        let fields = map
            .into_iter()
            .map(|(key, value)| {
                let attr = Attr::from_value(&key, value);
                (key, attr)
            })
            .collect();

        Model {
            name: name.into(),
            fields,
        }
    }

    /// Wraps `value` if it is a mapping, otherwise returns `None`
    pub fn from_value(name: impl Into<String>, value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Model::wrap(name, map)),
            _ => None,
        }
    }

    /// Name the model was created with, e.g. `"Player"`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up an attribute by key
    pub fn get(&self, key: &str) -> Option<&Attr> {
        self.fields
            .iter()
            .find(|(field, _)| field == key)
            .map(|(_, attr)| attr)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Attribute names in response order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Attr)> {
        self.fields.iter().map(|(key, attr)| (key.as_str(), attr))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Attr::as_str)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Attr::as_i64)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(Attr::as_u64)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Attr::as_f64)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Attr::as_bool)
    }

    pub fn get_model(&self, key: &str) -> Option<&Model> {
        self.get(key).and_then(Attr::as_model)
    }

    pub fn get_array(&self, key: &str) -> Option<&[Attr]> {
        self.get(key).and_then(Attr::as_array)
    }

    /// True when attribute `key` exists and is structurally equal to `value`
    pub fn attr_equals(&self, key: &str, value: &Value) -> bool {
        self.get(key).is_some_and(|attr| attr == value)
    }

    /// Rebuilds the JSON mapping this model was created from
    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(key, attr)| (key.clone(), attr.to_value()))
            .collect();
        Value::Object(map)
    }
}

impl PartialEq<Map<String, Value>> for Model {
    fn eq(&self, other: &Map<String, Value>) -> bool {
        self.fields.len() == other.len()
            && self
                .fields
                .iter()
                .all(|(key, attr)| other.get(key).is_some_and(|value| attr == value))
    }
}

impl Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, attr) in &self.fields {
            map.serialize_entry(key, attr)?;
        }
        map.end()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Model {} with {} fields>", self.name, self.fields.len())
    }
}
