//! Identifier newtypes.
//!
//! Resource identifiers are opaque strings on the wire. The `id_type!` macro
//! wraps them in distinct types so an invoice ID cannot be passed where a
//! customer ID is expected.

/// Define a string-backed identifier type.
///
/// This macro generates a newtype wrapper around `String` with
/// implementations for:
/// - `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `Serialize`, `Deserialize` (as string)
/// - `Display`, `Debug`, `AsRef<str>`
/// - `From<String>`, `From<&str>`, `Into<String>`
/// - [`FieldValue`](crate::FieldValue) and [`Validate`](crate::Validate)
///   (empty identifiers fail validation)
///
/// # Example
///
/// ```
/// use orb_billing_core::id_type;
///
/// id_type!(InvoiceId, "An invoice identifier.");
/// let id = InvoiceId::new("inv_123");
/// assert_eq!(id.as_str(), "inv_123");
/// ```
#[macro_export]
macro_rules! id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(::std::string::String);

        impl $name {
            /// Create an identifier from its wire form.
            #[must_use]
            pub fn new(id: impl Into<::std::string::String>) -> Self {
                Self(id.into())
            }

            /// The wire form.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(id: ::std::string::String) -> Self {
                Self(id)
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl ::std::convert::From<$name> for ::std::string::String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl $crate::FieldValue for $name {
            const KIND: &'static str = "identifier string";

            fn decode(value: &$crate::__private::Value) -> $crate::Result<Self> {
                <::std::string::String as $crate::FieldValue>::decode(value)
                    .map(Self)
                    .map_err(|_| $crate::ModelError::invalid(<Self as $crate::FieldValue>::KIND, value))
            }

            fn encode(&self) -> $crate::Result<$crate::__private::Value> {
                Ok($crate::__private::Value::String(self.0.clone()))
            }
        }

        impl $crate::Validate for $name {
            fn validate(&self) -> $crate::Result<()> {
                if self.0.is_empty() {
                    Err($crate::ModelError::InvalidField {
                        field: ::std::string::String::new(),
                        expected: <Self as $crate::FieldValue>::KIND,
                        found: "empty string".to_string(),
                    })
                } else {
                    Ok(())
                }
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )
                .map(Self)
            }
        }
    };
}
