//! Closed string enums with an "unrecognized" sentinel.
//!
//! The API may add enum values at any time. Decoding an unknown tag must not
//! fail, so every wire enum carries an `Unrecognized(String)` variant that
//! keeps the original text. The sentinel fails validation and cannot be
//! encoded back onto the wire.

/// Define a wire enum.
///
/// Generates the enum (plus `Unrecognized(String)`), `KNOWN`, `from_wire`,
/// `as_wire`, `is_recognized`, `Display`, `FromStr`, and the
/// [`FieldValue`](crate::FieldValue), [`Validate`](crate::Validate) and serde
/// impls.
///
/// # Example
///
/// ```
/// use orb_billing_core::{wire_enum, Validate};
///
/// wire_enum! {
///     /// How often a price is billed.
///     pub enum Cadence {
///         /// Billed every month.
///         Monthly = "monthly",
///         /// Billed every year.
///         Annual = "annual",
///     }
/// }
///
/// assert_eq!(Cadence::from_wire("monthly"), Cadence::Monthly);
/// assert!(Cadence::from_wire("biannual").validate().is_err());
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// A value this version of the SDK does not know.
            Unrecognized(::std::string::String),
        }

        impl $name {
            /// Every known wire value, in declaration order.
            pub const KNOWN: &'static [&'static str] = &[$($wire),*];

            /// Map a wire value to a variant; unknown values map to `Unrecognized`.
            #[must_use]
            pub fn from_wire(tag: &str) -> Self {
                match tag {
                    $($wire => Self::$variant,)*
                    other => Self::Unrecognized(other.to_string()),
                }
            }

            /// The wire value, or `None` for `Unrecognized`.
            #[must_use]
            pub fn as_wire(&self) -> ::std::option::Option<&'static str> {
                match self {
                    $(Self::$variant => Some($wire),)*
                    Self::Unrecognized(_) => None,
                }
            }

            /// Whether this is one of the known values.
            #[must_use]
            pub fn is_recognized(&self) -> bool {
                !matches!(self, Self::Unrecognized(_))
            }

            fn unrecognized_error(&self) -> $crate::ModelError {
                $crate::ModelError::UnrecognizedEnumValue {
                    field: ::std::string::String::new(),
                    value: self.to_string(),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($wire),)*
                    Self::Unrecognized(raw) => f.write_str(raw),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from_wire(s))
            }
        }

        impl $crate::FieldValue for $name {
            const KIND: &'static str = "string enum";

            fn decode(value: &$crate::__private::Value) -> $crate::Result<Self> {
                value
                    .as_str()
                    .map(Self::from_wire)
                    .ok_or_else(|| $crate::ModelError::invalid(<Self as $crate::FieldValue>::KIND, value))
            }

            fn encode(&self) -> $crate::Result<$crate::__private::Value> {
                self.as_wire()
                    .map(|wire| $crate::__private::Value::String(wire.to_string()))
                    .ok_or_else(|| self.unrecognized_error())
            }
        }

        impl $crate::Validate for $name {
            fn validate(&self) -> $crate::Result<()> {
                if self.is_recognized() {
                    Ok(())
                } else {
                    Err(self.unrecognized_error())
                }
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                match self.as_wire() {
                    Some(wire) => serializer.serialize_str(wire),
                    None => Err(<S::Error as $crate::__private::serde::ser::Error>::custom(
                        self.unrecognized_error(),
                    )),
                }
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Ok(Self::from_wire(&raw))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{FieldValue, ModelError, Validate};

    crate::wire_enum! {
        /// Billing cadence.
        enum Cadence {
            /// Once a year.
            Annual = "annual",
            /// Twice a year.
            SemiAnnual = "semi_annual",
            /// Once a month.
            Monthly = "monthly",
        }
    }

    #[test]
    fn known_values_roundtrip() {
        for wire in Cadence::KNOWN {
            let value = Cadence::decode(&json!(wire)).unwrap();
            assert!(value.is_recognized());
            assert_eq!(value.encode().unwrap(), json!(wire));
        }
    }

    #[test]
    fn unknown_tag_decodes_but_fails_validation() {
        let value = Cadence::decode(&json!("biannual")).unwrap();
        assert_eq!(value, Cadence::Unrecognized("biannual".into()));
        assert_eq!(
            value.validate(),
            Err(ModelError::UnrecognizedEnumValue {
                field: String::new(),
                value: "biannual".into()
            })
        );
    }

    #[test]
    fn unknown_tag_cannot_be_encoded() {
        let value = Cadence::from_wire("biannual");
        assert!(matches!(
            value.encode(),
            Err(ModelError::UnrecognizedEnumValue { .. })
        ));
        assert!(serde_json::to_value(&value).is_err());
    }

    #[test]
    fn non_string_is_invalid() {
        assert!(matches!(
            Cadence::decode(&json!(12)),
            Err(ModelError::InvalidField { .. })
        ));
    }

    #[test]
    fn serde_accepts_unknown_tags() {
        let value: Cadence = serde_json::from_value(json!("weekly")).unwrap();
        assert_eq!(value.to_string(), "weekly");
        assert_eq!(value.as_wire(), None);
        assert_eq!(
            serde_json::to_value(Cadence::SemiAnnual).unwrap(),
            json!("semi_annual")
        );
    }
}
