//! The tagged-union codec.
//!
//! Polymorphic resources (prices, conversion-rate configs) are JSON objects
//! whose shape is selected by a discriminator field such as `model_type`.
//! [`VariantTable`] implements decoding once for every such union:
//!
//! 1. The input must be a JSON object, otherwise the decode fails with
//!    [`ModelError::MalformedDocument`].
//! 2. A missing or non-string discriminator yields the unknown variant.
//! 3. The discriminator selects exactly one table entry; an unlisted tag
//!    yields the unknown variant. No other entry is tried.
//! 4. The object is validated against the entry's schema. On success the
//!    variant is materialized; on failure the [`UnionPolicy`] decides between
//!    keeping the raw payload as the unknown variant and raising
//!    [`ModelError::UnionDispatch`].
//!
//! The unknown variant keeps the original document verbatim, so payloads of
//! shapes added to the API later still round-trip. Validating it always fails.
//!
//! Concrete unions are declared with the [`tagged_union!`](crate::tagged_union!) macro.

use serde_json::Value;

use crate::config::UnionPolicy;
use crate::document::RawDocument;
use crate::error::{ModelError, Result};
use crate::field::FieldValue;
use crate::schema::Schema;

/// Outcome of decoding a union payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<U> {
    /// The payload matched a known variant.
    Resolved(U),
    /// The payload is kept verbatim.
    Unknown(RawDocument),
}

/// One known shape of a union.
pub struct VariantEntry<U> {
    /// Discriminator value selecting this shape.
    pub tag: &'static str,
    /// Schema the payload must satisfy.
    pub schema: &'static Schema,
    /// Wrap a conforming document into the union.
    pub wrap: fn(RawDocument) -> U,
}

/// The fixed discriminator-to-variant table of a union type.
pub struct VariantTable<U: 'static> {
    /// Name of the union type, for errors and logs.
    pub union: &'static str,
    /// Name of the discriminator field.
    pub discriminator: &'static str,
    /// Known shapes.
    pub variants: &'static [VariantEntry<U>],
}

impl<U> VariantTable<U> {
    /// Decode a JSON value.
    ///
    /// # Errors
    ///
    /// - [`ModelError::MalformedDocument`] if `value` is not an object.
    /// - [`ModelError::UnionDispatch`] if the matching variant rejects the
    ///   payload and `policy` is [`UnionPolicy::Raise`].
    pub fn decode(&self, value: Value, policy: UnionPolicy) -> Result<Resolution<U>> {
        let document = RawDocument::from_value(value)?;
        self.resolve(document, policy)
    }

    /// Resolve an already-wrapped document.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnionDispatch`] if the matching variant rejects
    /// the payload and `policy` is [`UnionPolicy::Raise`].
    pub fn resolve(&self, document: RawDocument, policy: UnionPolicy) -> Result<Resolution<U>> {
        let Some(tag) = self.tag_of(&document).map(str::to_owned) else {
            tracing::trace!(
                union = self.union,
                discriminator = self.discriminator,
                "no string discriminator, keeping payload as unknown"
            );
            return Ok(Resolution::Unknown(document));
        };

        let Some(entry) = self.entry(&tag) else {
            tracing::debug!(
                union = self.union,
                tag = %tag,
                "unrecognized discriminator, keeping payload as unknown"
            );
            return Ok(Resolution::Unknown(document));
        };

        match entry.schema.validate(&document) {
            Ok(()) => {
                tracing::trace!(union = self.union, tag = %tag, "resolved variant");
                Ok(Resolution::Resolved((entry.wrap)(document)))
            }
            Err(cause) => match policy {
                UnionPolicy::FallbackUnknown => {
                    tracing::debug!(
                        union = self.union,
                        tag = %tag,
                        error = %cause,
                        "payload does not match its variant, keeping it as unknown"
                    );
                    Ok(Resolution::Unknown(document))
                }
                UnionPolicy::Raise => Err(ModelError::UnionDispatch {
                    union: self.union,
                    tag: Some(tag),
                    cause: Some(Box::new(cause)),
                }),
            },
        }
    }

    /// The discriminator value of `document`, if it is a string.
    #[must_use]
    pub fn tag_of<'a>(&self, document: &'a RawDocument) -> Option<&'a str> {
        document.get(self.discriminator).and_then(Value::as_str)
    }

    /// Check that `document` carries `tag` as its discriminator.
    ///
    /// A variant's own schema only types the discriminator as a string, so
    /// this is what ties a held variant to the tag it decodes back from.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnresolvedUnion`] whose cause names the
    /// discriminator field.
    pub fn expect_tag(&self, document: &RawDocument, tag: &'static str) -> Result<()> {
        let cause = match document.get(self.discriminator) {
            Some(found) if found.as_str() == Some(tag) => return Ok(()),
            None => ModelError::MissingField {
                field: self.discriminator.to_string(),
            },
            Some(found) => ModelError::InvalidField {
                field: self.discriminator.to_string(),
                expected: tag,
                found: found.to_string(),
            },
        };
        Err(ModelError::UnresolvedUnion {
            union: self.union,
            tag: self.tag_of(document).map(str::to_owned),
            cause: Some(Box::new(cause)),
        })
    }

    /// Validate the JSON stored in a union-typed field.
    ///
    /// Resolution already validates the selected variant, so a resolved
    /// payload is not walked a second time.
    ///
    /// # Errors
    ///
    /// Returns the error validating the decoded union would return.
    pub fn validate_value(&self, value: &Value, policy: UnionPolicy) -> Result<()> {
        let document = <RawDocument as FieldValue>::decode(value)?;
        match self.resolve(document, policy)? {
            Resolution::Resolved(_) => Ok(()),
            Resolution::Unknown(document) => Err(self.unresolved_error(&document)),
        }
    }

    /// The entry registered for `tag`.
    #[must_use]
    pub fn entry(&self, tag: &str) -> Option<&VariantEntry<U>> {
        self.variants.iter().find(|entry| entry.tag == tag)
    }

    /// Known discriminator values, in table order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.variants.iter().map(|entry| entry.tag)
    }

    /// The error validating an unknown payload reports.
    #[must_use]
    pub fn unresolved_error(&self, document: &RawDocument) -> ModelError {
        let (tag, cause) = self.diagnose(document);
        ModelError::UnresolvedUnion {
            union: self.union,
            tag,
            cause,
        }
    }

    /// The error reported when a resolved variant is demanded of an unknown
    /// payload.
    #[must_use]
    pub fn dispatch_error(&self, document: &RawDocument) -> ModelError {
        let (tag, cause) = self.diagnose(document);
        ModelError::UnionDispatch {
            union: self.union,
            tag,
            cause,
        }
    }

    fn diagnose(&self, document: &RawDocument) -> (Option<String>, Option<Box<ModelError>>) {
        let tag = self.tag_of(document);
        let cause = tag
            .and_then(|tag| self.entry(tag))
            .and_then(|entry| entry.schema.validate(document).err())
            .map(Box::new);
        (tag.map(str::to_owned), cause)
    }
}

impl<U> std::fmt::Debug for VariantTable<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariantTable")
            .field("union", &self.union)
            .field("discriminator", &self.discriminator)
            .field("tags", &self.tags().collect::<Vec<_>>())
            .finish()
    }
}

/// Define a tagged union over model types.
///
/// Each entry reads `Variant(ModelType) = "tag", constructor, picker;`.
/// The macro generates the enum (plus `Unknown(RawDocument)`), its
/// [`VariantTable`], a named constructor and a `picker(&self) -> Option<&T>`
/// per variant, `decode`/`decode_with`, `resolved`, and the
/// [`FieldValue`](crate::FieldValue), [`Validate`](crate::Validate) and serde
/// impls.
///
/// Constructors stamp the discriminator into the variant's document, so a
/// union built from a variant always carries the matching tag. A variant
/// placed in the enum directly with some other tag fails validation.
#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $disc:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident ( $vty:ty ) = $tag:literal, $ctor:ident, $pick:ident;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant($vty),
            )*
            /// A payload of a shape this version of the SDK does not recognize,
            /// kept verbatim.
            Unknown($crate::RawDocument),
        }

        impl $name {
            /// Name of the discriminator field.
            pub const DISCRIMINATOR: &'static str = $disc;

            /// The discriminator-to-variant table.
            pub const VARIANTS: &'static $crate::VariantTable<Self> = &$crate::VariantTable {
                union: stringify!($name),
                discriminator: $disc,
                variants: &[$(
                    $crate::VariantEntry {
                        tag: $tag,
                        schema: <$vty as $crate::Model>::SCHEMA,
                        wrap: |document| Self::$variant(<$vty as $crate::Model>::from_document(document)),
                    }
                ),*],
            };

            $(
                #[doc = concat!("Wrap a `", $tag, "` variant, setting `", $disc, "` to `\"", $tag, "\"`.")]
                #[must_use]
                pub fn $ctor(value: $vty) -> Self {
                    let document = <$vty as $crate::Model>::into_document(value)
                        .with_raw($disc, $crate::__private::Value::String($tag.to_string()));
                    Self::$variant(<$vty as $crate::Model>::from_document(document))
                }

                #[doc = concat!("The `", $tag, "` variant, if this is one.")]
                #[must_use]
                pub fn $pick(&self) -> ::std::option::Option<&$vty> {
                    if let Self::$variant(value) = self {
                        Some(value)
                    } else {
                        None
                    }
                }
            )*

            /// Decode using the process-wide union policy.
            ///
            /// # Errors
            ///
            /// See `VariantTable::decode`.
            pub fn decode(value: $crate::__private::Value) -> $crate::Result<Self> {
                Self::decode_with(value, $crate::CodecConfig::current().union_policy)
            }

            /// Decode using an explicit union policy.
            ///
            /// # Errors
            ///
            /// See `VariantTable::decode`.
            pub fn decode_with(
                value: $crate::__private::Value,
                policy: $crate::UnionPolicy,
            ) -> $crate::Result<Self> {
                Self::VARIANTS.decode(value, policy).map(Self::from_resolution)
            }

            fn from_resolution(resolution: $crate::Resolution<Self>) -> Self {
                match resolution {
                    $crate::Resolution::Resolved(value) => value,
                    $crate::Resolution::Unknown(document) => Self::Unknown(document),
                }
            }

            /// Whether this holds an unrecognized payload.
            #[must_use]
            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }

            /// The discriminator value, if present.
            #[must_use]
            pub fn discriminator(&self) -> ::std::option::Option<&str> {
                Self::VARIANTS.tag_of(self.document())
            }

            /// The backing document of whichever variant is held.
            #[must_use]
            pub fn document(&self) -> &$crate::RawDocument {
                match self {
                    $(Self::$variant(value) => <$vty as $crate::Model>::document(value),)*
                    Self::Unknown(document) => document,
                }
            }

            /// Encode to a JSON value.
            #[must_use]
            pub fn to_value(&self) -> $crate::__private::Value {
                self.document().to_value()
            }

            /// Demand a known variant.
            ///
            /// # Errors
            ///
            /// Returns `ModelError::UnionDispatch` if this holds an unrecognized
            /// payload.
            pub fn resolved(self) -> $crate::Result<Self> {
                match self {
                    Self::Unknown(document) => Err(Self::VARIANTS.dispatch_error(&document)),
                    known => Ok(known),
                }
            }
        }

        impl $crate::FieldValue for $name {
            const KIND: &'static str = "object";

            fn decode(value: &$crate::__private::Value) -> $crate::Result<Self> {
                let document = <$crate::RawDocument as $crate::FieldValue>::decode(value)?;
                Self::VARIANTS
                    .resolve(document, $crate::CodecConfig::current().union_policy)
                    .map(Self::from_resolution)
            }

            fn encode(&self) -> $crate::Result<$crate::__private::Value> {
                Ok(self.to_value())
            }
        }

        impl $crate::Validate for $name {
            fn validate(&self) -> $crate::Result<()> {
                match self {
                    $(Self::$variant(value) => {
                        Self::VARIANTS.expect_tag(<$vty as $crate::Model>::document(value), $tag)?;
                        <$vty as $crate::Validate>::validate(value)
                    })*
                    Self::Unknown(document) => Err(Self::VARIANTS.unresolved_error(document)),
                }
            }

            fn validate_value(value: &$crate::__private::Value) -> $crate::Result<()> {
                Self::VARIANTS.validate_value(value, $crate::CodecConfig::current().union_policy)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(self.document(), serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value = <$crate::__private::Value as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Self::decode(value)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}
