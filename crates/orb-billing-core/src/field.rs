//! Typed field values.
//!
//! [`FieldValue`] is the translation between a JSON value stored in a
//! [`RawDocument`](crate::RawDocument) and a statically-typed Rust value.
//! Decoding is shape-only: it checks the JSON type and nothing else, so a
//! document with an unexpected enum tag or an unresolved union still reads.
//! Deeper checks belong to [`Validate`](crate::Validate).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModelError, Result};

/// A value that can be stored in a document field.
pub trait FieldValue: Sized {
    /// Human-readable name of the expected wire shape.
    const KIND: &'static str;

    /// Decode from the JSON value stored in a field.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidField`] (with an empty path) when the JSON
    /// shape does not match.
    fn decode(value: &Value) -> Result<Self>;

    /// Encode into the JSON value to store in a field.
    ///
    /// # Errors
    ///
    /// Returns an error for values that have no wire representation, such as
    /// an unrecognized enum tag.
    fn encode(&self) -> Result<Value>;
}

impl FieldValue for String {
    const KIND: &'static str = "string";

    fn decode(value: &Value) -> Result<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ModelError::invalid(Self::KIND, value))
    }

    fn encode(&self) -> Result<Value> {
        Ok(Value::String(self.clone()))
    }
}

impl FieldValue for i64 {
    const KIND: &'static str = "integer";

    fn decode(value: &Value) -> Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| ModelError::invalid(Self::KIND, value))
    }

    fn encode(&self) -> Result<Value> {
        Ok(Value::from(*self))
    }
}

impl FieldValue for f64 {
    const KIND: &'static str = "number";

    fn decode(value: &Value) -> Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| ModelError::invalid(Self::KIND, value))
    }

    fn encode(&self) -> Result<Value> {
        serde_json::Number::from_f64(*self)
            .map(Value::Number)
            .ok_or_else(|| ModelError::InvalidField {
                field: String::new(),
                expected: Self::KIND,
                found: self.to_string(),
            })
    }
}

impl FieldValue for bool {
    const KIND: &'static str = "boolean";

    fn decode(value: &Value) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| ModelError::invalid(Self::KIND, value))
    }

    fn encode(&self) -> Result<Value> {
        Ok(Value::Bool(*self))
    }
}

/// Opaque JSON, stored and returned as-is.
impl FieldValue for Value {
    const KIND: &'static str = "any JSON value";

    fn decode(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }

    fn encode(&self) -> Result<Value> {
        Ok(self.clone())
    }
}

/// RFC 3339 timestamps.
impl FieldValue for DateTime<Utc> {
    const KIND: &'static str = "RFC 3339 timestamp";

    fn decode(value: &Value) -> Result<Self> {
        let text = value
            .as_str()
            .ok_or_else(|| ModelError::invalid(Self::KIND, value))?;
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| ModelError::InvalidField {
                field: String::new(),
                expected: Self::KIND,
                found: format!("{text:?}"),
            })
    }

    fn encode(&self) -> Result<Value> {
        Ok(Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    const KIND: &'static str = "array";

    fn decode(value: &Value) -> Result<Self> {
        let items = value
            .as_array()
            .ok_or_else(|| ModelError::invalid(Self::KIND, value))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::decode(item).map_err(|e| e.within(&format!("[{i}]"))))
            .collect()
    }

    fn encode(&self) -> Result<Value> {
        self.iter()
            .enumerate()
            .map(|(i, item)| item.encode().map_err(|e| e.within(&format!("[{i}]"))))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }
}

impl<T: FieldValue> FieldValue for BTreeMap<String, T> {
    const KIND: &'static str = "object";

    fn decode(value: &Value) -> Result<Self> {
        let entries = value
            .as_object()
            .ok_or_else(|| ModelError::invalid(Self::KIND, value))?;
        entries
            .iter()
            .map(|(k, v)| T::decode(v).map(|v| (k.clone(), v)).map_err(|e| e.within(k)))
            .collect()
    }

    fn encode(&self) -> Result<Value> {
        let mut map = serde_json::Map::with_capacity(self.len());
        for (k, v) in self {
            map.insert(k.clone(), v.encode().map_err(|e| e.within(k))?);
        }
        Ok(Value::Object(map))
    }
}

/// A nullable value inside a container, e.g. the `null` entries of a matrix
/// dimension list.
impl<T: FieldValue> FieldValue for Option<T> {
    const KIND: &'static str = T::KIND;

    fn decode(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::decode(other).map(Some),
        }
    }

    fn encode(&self) -> Result<Value> {
        self.as_ref().map_or(Ok(Value::Null), FieldValue::encode)
    }
}

/// A decimal amount carried as a string on the wire (e.g. `"1.50"`).
///
/// The wire text is kept verbatim so that amounts round-trip exactly.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decimal(String);

impl Decimal {
    /// Create a decimal from its string form.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidField`] if `text` is not a plain decimal
    /// literal (optional sign, digits, optional fraction).
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if is_decimal_literal(&text) {
            Ok(Self(text))
        } else {
            Err(ModelError::InvalidField {
                field: String::new(),
                expected: Self::KIND,
                found: format!("{text:?}"),
            })
        }
    }

    /// The wire text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the wire text is a plain decimal literal.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        is_decimal_literal(&self.0)
    }

    /// Approximate the amount as a float.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        self.0.parse().ok()
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self.0)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Decimal {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl FieldValue for Decimal {
    const KIND: &'static str = "decimal string";

    fn decode(value: &Value) -> Result<Self> {
        value
            .as_str()
            .map(|s| Self(s.to_string()))
            .ok_or_else(|| ModelError::invalid(Self::KIND, value))
    }

    fn encode(&self) -> Result<Value> {
        Ok(Value::String(self.0.clone()))
    }
}

fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    digits(whole) && fraction.map_or(true, digits)
}
