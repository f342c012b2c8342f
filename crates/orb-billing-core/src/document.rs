//! The raw document backing every model.
//!
//! A [`RawDocument`] is an insertion-ordered JSON object. Documents are
//! immutable values: clones share storage, and every update consumes the
//! document and returns a new one, copying the map only when it is shared.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{json_kind, ModelError, Result};
use crate::field::FieldValue;

/// An insertion-ordered mapping from wire field names to JSON values.
#[derive(Clone, Default, PartialEq)]
pub struct RawDocument {
    fields: Arc<Map<String, Value>>,
}

impl RawDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing JSON object.
    #[must_use]
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self {
            fields: Arc::new(map),
        }
    }

    /// Wrap a JSON value, which must be an object.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MalformedDocument`] if `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(ModelError::MalformedDocument(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Parse JSON text into a document.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MalformedDocument`] if the text is not valid JSON
    /// or does not hold an object.
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Look up the raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Whether `key` is present (even if null).
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the document has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Borrow the underlying map.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Copy the document out as a JSON object value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.as_ref().clone())
    }

    /// Convert into a JSON object value, copying only if the storage is shared.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(Arc::try_unwrap(self.fields).unwrap_or_else(|shared| (*shared).clone()))
    }

    /// Read a required field.
    ///
    /// # Errors
    ///
    /// - [`ModelError::MissingField`] if the key is absent.
    /// - [`ModelError::NullField`] if the value is null.
    /// - Any decode error of `T`, with the field path prefixed.
    pub fn required<T: FieldValue>(&self, key: &str) -> Result<T> {
        match self.fields.get(key) {
            None => Err(ModelError::MissingField { field: key.into() }),
            Some(Value::Null) => Err(ModelError::NullField { field: key.into() }),
            Some(value) => T::decode(value).map_err(|e| e.within(key)),
        }
    }

    /// Read an optional field. Absence and null both read as `None`.
    ///
    /// # Errors
    ///
    /// Returns any decode error of `T`, with the field path prefixed.
    pub fn optional<T: FieldValue>(&self, key: &str) -> Result<Option<T>> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::decode(value).map(Some).map_err(|e| e.within(key)),
        }
    }

    /// Encode `value` and store it under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns the encode error of `T` (for example an unrecognized enum tag).
    pub fn with<T: FieldValue>(self, key: &str, value: &T) -> Result<Self> {
        let encoded = value.encode().map_err(|e| e.within(key))?;
        Ok(self.with_raw(key, encoded))
    }

    /// Store an optional value; `None` writes an explicit JSON null.
    ///
    /// # Errors
    ///
    /// Returns the encode error of `T`.
    pub fn with_optional<T: FieldValue>(self, key: &str, value: Option<&T>) -> Result<Self> {
        match value {
            Some(value) => self.with(key, value),
            None => Ok(self.with_raw(key, Value::Null)),
        }
    }

    /// Store a raw JSON value under `key`.
    #[must_use]
    pub fn with_raw(mut self, key: &str, value: Value) -> Self {
        Arc::make_mut(&mut self.fields).insert(key.to_string(), value);
        self
    }

    /// Remove `key` from the document.
    #[must_use]
    pub fn without(mut self, key: &str) -> Self {
        if self.fields.contains_key(key) {
            Arc::make_mut(&mut self.fields).shift_remove(key);
        }
        self
    }
}

impl std::fmt::Debug for RawDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.fields.iter()).finish()
    }
}

impl From<Map<String, Value>> for RawDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

/// Nested objects.
impl FieldValue for RawDocument {
    const KIND: &'static str = "object";

    fn decode(value: &Value) -> Result<Self> {
        value
            .as_object()
            .map(|map| Self::from_map(map.clone()))
            .ok_or_else(|| ModelError::invalid(Self::KIND, value))
    }

    fn encode(&self) -> Result<Value> {
        Ok(self.to_value())
    }
}

impl Serialize for RawDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.fields.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Map::deserialize(deserializer).map(Self::from_map)
    }
}
