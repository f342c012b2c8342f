//! Schema descriptors and the validator.
//!
//! Every model is described by a [`Schema`]: an ordered table of field rules.
//! The same table drives typed reads, writes and validation, so there is one
//! definition per model instead of hand-written accessors and checks.
//!
//! Validation is fail-fast: the first violation encountered in schema order
//! is returned.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::document::RawDocument;
use crate::error::{ModelError, Result};
use crate::field::{Decimal, FieldValue};

/// Checks beyond the JSON shape: required fields, enum tags, union resolution.
pub trait Validate {
    /// Validate this value.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    fn validate(&self) -> Result<()>;

    /// Validate the JSON stored in a field.
    ///
    /// Decodes and then validates. Containers forward element by element,
    /// and unions override it because resolving a variant already validates
    /// it.
    ///
    /// # Errors
    ///
    /// Returns the decode error or the first violation, with paths relative
    /// to `value`.
    fn validate_value(value: &Value) -> Result<()>
    where
        Self: FieldValue + Sized,
    {
        Self::decode(value)?.validate()
    }
}

macro_rules! always_valid {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Validate for $ty {
                fn validate(&self) -> Result<()> {
                    Ok(())
                }
            }
        )*
    };
}

always_valid!(String, i64, f64, bool, Value, DateTime<Utc>);

impl Validate for Decimal {
    fn validate(&self) -> Result<()> {
        if self.is_well_formed() {
            Ok(())
        } else {
            Err(ModelError::InvalidField {
                field: String::new(),
                expected: Self::KIND,
                found: format!("{:?}", self.as_str()),
            })
        }
    }
}

impl<T: Validate + FieldValue> Validate for Vec<T> {
    fn validate(&self) -> Result<()> {
        for (i, item) in self.iter().enumerate() {
            item.validate().map_err(|e| e.within(&format!("[{i}]")))?;
        }
        Ok(())
    }

    fn validate_value(value: &Value) -> Result<()> {
        let items = value
            .as_array()
            .ok_or_else(|| ModelError::invalid(Self::KIND, value))?;
        for (i, item) in items.iter().enumerate() {
            T::validate_value(item).map_err(|e| e.within(&format!("[{i}]")))?;
        }
        Ok(())
    }
}

impl<T: Validate + FieldValue> Validate for BTreeMap<String, T> {
    fn validate(&self) -> Result<()> {
        for (k, v) in self {
            v.validate().map_err(|e| e.within(k))?;
        }
        Ok(())
    }

    fn validate_value(value: &Value) -> Result<()> {
        let entries = value
            .as_object()
            .ok_or_else(|| ModelError::invalid(Self::KIND, value))?;
        for (k, v) in entries {
            T::validate_value(v).map_err(|e| e.within(k))?;
        }
        Ok(())
    }
}

impl<T: Validate + FieldValue> Validate for Option<T> {
    fn validate(&self) -> Result<()> {
        self.as_ref().map_or(Ok(()), Validate::validate)
    }

    fn validate_value(value: &Value) -> Result<()> {
        match value {
            Value::Null => Ok(()),
            other => T::validate_value(other),
        }
    }
}

/// One entry of a [`Schema`].
///
/// Rules live in `static` tables, hence the `Sync` bound.
pub trait FieldRule: Sync {
    /// Wire name of the field.
    fn name(&self) -> &'static str;

    /// Whether the field must be present and non-null.
    fn is_required(&self) -> bool;

    /// Read the field from `document` and validate its value.
    ///
    /// # Errors
    ///
    /// Returns the read or validation error, with the field path prefixed.
    fn check(&self, document: &RawDocument) -> Result<()>;
}

/// A required field of type `T`.
pub struct Required<T> {
    name: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> Required<T> {
    /// Describe a required field stored under `name`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _value: PhantomData,
        }
    }
}

impl<T: FieldValue + Validate> FieldRule for Required<T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_required(&self) -> bool {
        true
    }

    fn check(&self, document: &RawDocument) -> Result<()> {
        match document.get(self.name) {
            None => Err(ModelError::MissingField {
                field: self.name.into(),
            }),
            Some(Value::Null) => Err(ModelError::NullField {
                field: self.name.into(),
            }),
            Some(value) => T::validate_value(value).map_err(|e| e.within(self.name)),
        }
    }
}

/// An optional field of type `T`.
pub struct Optional<T> {
    name: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> Optional<T> {
    /// Describe an optional field stored under `name`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _value: PhantomData,
        }
    }
}

impl<T: FieldValue + Validate> FieldRule for Optional<T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_required(&self) -> bool {
        false
    }

    fn check(&self, document: &RawDocument) -> Result<()> {
        match document.get(self.name) {
            None | Some(Value::Null) => Ok(()),
            Some(value) => T::validate_value(value).map_err(|e| e.within(self.name)),
        }
    }
}

/// The declared fields of a model, in wire order.
pub struct Schema {
    /// Model name, used in logs.
    pub name: &'static str,
    /// Field rules in declaration order.
    pub fields: &'static [&'static dyn FieldRule],
}

impl Schema {
    /// Validate `document` against this schema.
    ///
    /// # Errors
    ///
    /// Returns the first violation in field order.
    pub fn validate(&self, document: &RawDocument) -> Result<()> {
        tracing::trace!(model = self.name, "validating document");
        for rule in self.fields {
            rule.check(document)?;
        }
        Ok(())
    }

    /// All declared field names, in order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|rule| rule.name())
    }

    /// Names of the required fields, in order.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|rule| rule.is_required())
            .map(|rule| rule.name())
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("fields", &self.field_names().collect::<Vec<_>>())
            .finish()
    }
}
