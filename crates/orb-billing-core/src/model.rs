//! The [`Model`] trait and the [`model!`](crate::model!) macro.
//!
//! A model is a value type over a [`RawDocument`]: its identity is the JSON it
//! holds, reads decode lazily, and writes return a new model.

use serde_json::Value;

use crate::document::RawDocument;
use crate::error::Result;
use crate::schema::Schema;

/// A named, closed set of fields over a raw document.
pub trait Model: Sized {
    /// The field table that drives reads, writes and validation.
    const SCHEMA: &'static Schema;

    /// Wrap a document without checking it.
    fn from_document(document: RawDocument) -> Self;

    /// Borrow the backing document.
    fn document(&self) -> &RawDocument;

    /// Unwrap the backing document.
    fn into_document(self) -> RawDocument;

    /// Decode from a JSON value.
    ///
    /// Only the outer shape is checked; field problems surface on access or
    /// validation.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MalformedDocument`](crate::ModelError::MalformedDocument)
    /// if `value` is not an object.
    fn from_value(value: Value) -> Result<Self> {
        RawDocument::from_value(value).map(Self::from_document)
    }

    /// Decode from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MalformedDocument`](crate::ModelError::MalformedDocument)
    /// if the text is not a JSON object.
    fn parse(json: &str) -> Result<Self> {
        RawDocument::parse(json).map(Self::from_document)
    }

    /// Encode to a JSON value.
    fn to_value(&self) -> Value {
        self.document().to_value()
    }
}

/// Define a model type from a field table.
///
/// Each entry reads `getter / setter: required|optional Type = "wire_key";`.
/// The macro generates the wrapper struct, its [`Model`] impl and schema,
/// typed getters, consuming setters, and the [`FieldValue`](crate::FieldValue),
/// [`Validate`](crate::Validate) and serde impls.
///
/// # Example
///
/// ```
/// use orb_billing_core::{model, Decimal, Model, Validate};
///
/// model! {
///     /// Rate charged per unit.
///     pub struct UnitConfig {
///         /// Rate per unit of usage.
///         unit_amount / with_unit_amount: required Decimal = "unit_amount";
///     }
/// }
///
/// let config = UnitConfig::parse(r#"{"unit_amount": "0.50"}"#).unwrap();
/// assert_eq!(config.unit_amount().unwrap().as_str(), "0.50");
/// assert!(config.validate().is_ok());
/// ```
#[macro_export]
macro_rules! model {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $getter:ident / $setter:ident : $kind:ident $ty:ty = $wire:literal;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Default, PartialEq)]
        $vis struct $name {
            document: $crate::RawDocument,
        }

        impl $crate::Model for $name {
            const SCHEMA: &'static $crate::Schema = &$crate::Schema {
                name: stringify!($name),
                fields: &[$(&$crate::__field_rule!($kind, $ty, $wire)),*],
            };

            fn from_document(document: $crate::RawDocument) -> Self {
                Self { document }
            }

            fn document(&self) -> &$crate::RawDocument {
                &self.document
            }

            fn into_document(self) -> $crate::RawDocument {
                self.document
            }
        }

        impl $name {
            #[doc = concat!("Create an empty `", stringify!($name), "` for building a request body.")]
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $crate::__field_accessors!($kind, [$(#[$fmeta])*], $getter, $setter, $ty, $wire);
            )*
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.document).finish()
            }
        }

        impl $crate::FieldValue for $name {
            const KIND: &'static str = "object";

            fn decode(value: &$crate::__private::Value) -> $crate::Result<Self> {
                <$crate::RawDocument as $crate::FieldValue>::decode(value)
                    .map(<Self as $crate::Model>::from_document)
            }

            fn encode(&self) -> $crate::Result<$crate::__private::Value> {
                Ok(self.document.to_value())
            }
        }

        impl $crate::Validate for $name {
            fn validate(&self) -> $crate::Result<()> {
                <Self as $crate::Model>::SCHEMA.validate(&self.document)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&self.document, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                <$crate::RawDocument as $crate::__private::serde::Deserialize>::deserialize(deserializer)
                    .map(<Self as $crate::Model>::from_document)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_rule {
    (required, $ty:ty, $wire:literal) => {
        $crate::Required::<$ty>::new($wire)
    };
    (optional, $ty:ty, $wire:literal) => {
        $crate::Optional::<$ty>::new($wire)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_accessors {
    (required, [$(#[$fmeta:meta])*], $getter:ident, $setter:ident, $ty:ty, $wire:literal) => {
        $(#[$fmeta])*
        ///
        /// # Errors
        ///
        /// Returns an error if the field is missing, null, or of the wrong type.
        pub fn $getter(&self) -> $crate::Result<$ty> {
            self.document.required($wire)
        }

        #[doc = concat!("Set `", $wire, "`.")]
        ///
        /// # Errors
        ///
        /// Returns an error if the value has no wire representation.
        pub fn $setter(self, value: $ty) -> $crate::Result<Self> {
            self.document.with($wire, &value).map(|document| Self { document })
        }
    };
    (optional, [$(#[$fmeta:meta])*], $getter:ident, $setter:ident, $ty:ty, $wire:literal) => {
        $(#[$fmeta])*
        ///
        /// # Errors
        ///
        /// Returns an error if the field is present but of the wrong type.
        pub fn $getter(&self) -> $crate::Result<::std::option::Option<$ty>> {
            self.document.optional($wire)
        }

        #[doc = concat!("Set `", $wire, "`; `None` writes an explicit null.")]
        ///
        /// # Errors
        ///
        /// Returns an error if the value has no wire representation.
        pub fn $setter(self, value: ::std::option::Option<$ty>) -> $crate::Result<Self> {
            self.document
                .with_optional($wire, value.as_ref())
                .map(|document| Self { document })
        }
    };
}
