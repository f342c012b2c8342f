//! Error types for the Orb billing model layer.

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while reading, writing, validating or decoding models.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// A required field is absent from the document.
    #[error("missing required field: {field}")]
    MissingField {
        /// Path of the missing field.
        field: String,
    },

    /// A required field is present but null.
    #[error("required field is null: {field}")]
    NullField {
        /// Path of the null field.
        field: String,
    },

    /// A field holds a JSON value of the wrong type.
    #[error("invalid field {field}: expected {expected}, found {found}")]
    InvalidField {
        /// Path of the offending field.
        field: String,
        /// What the schema declares.
        expected: &'static str,
        /// What the document holds.
        found: String,
    },

    /// An enum field holds a tag outside the known set.
    #[error("unrecognized value for {field}: {value:?}")]
    UnrecognizedEnumValue {
        /// Path of the enum field.
        field: String,
        /// The wire value that was not recognized.
        value: String,
    },

    /// A union could not be resolved to a known variant where one was demanded.
    #[error("{union} did not resolve to a known variant (tag: {tag:?})")]
    UnionDispatch {
        /// Name of the union type.
        union: &'static str,
        /// Discriminator value found in the document, if any.
        tag: Option<String>,
        /// Why the matching variant failed to materialize, if one was found.
        #[source]
        cause: Option<Box<ModelError>>,
    },

    /// Validation ran on a union that holds an unknown-variant payload.
    #[error("{union} holds an unresolved payload (tag: {tag:?})")]
    UnresolvedUnion {
        /// Name of the union type.
        union: &'static str,
        /// Discriminator value found in the document, if any.
        tag: Option<String>,
        /// Why the matching variant failed to materialize, if one was found.
        #[source]
        cause: Option<Box<ModelError>>,
    },

    /// The outer document is not valid JSON or not a JSON object.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ModelError {
    /// Prefix the field path of this error with `parent`.
    ///
    /// Index segments (`[3]`) attach without a dot; other segments are joined
    /// with `.`. Errors without a field path are returned unchanged.
    #[must_use]
    pub fn within(self, parent: &str) -> Self {
        match self {
            Self::MissingField { field } => Self::MissingField {
                field: join_path(parent, &field),
            },
            Self::NullField { field } => Self::NullField {
                field: join_path(parent, &field),
            },
            Self::InvalidField {
                field,
                expected,
                found,
            } => Self::InvalidField {
                field: join_path(parent, &field),
                expected,
                found,
            },
            Self::UnrecognizedEnumValue { field, value } => Self::UnrecognizedEnumValue {
                field: join_path(parent, &field),
                value,
            },
            Self::UnionDispatch { union, tag, cause } => Self::UnionDispatch {
                union,
                tag,
                cause: cause.map(|c| Box::new(c.within(parent))),
            },
            Self::UnresolvedUnion { union, tag, cause } => Self::UnresolvedUnion {
                union,
                tag,
                cause: cause.map(|c| Box::new(c.within(parent))),
            },
            other @ (Self::MalformedDocument(_) | Self::Configuration(_)) => other,
        }
    }

    /// The field path this error names, if any.
    ///
    /// For union errors this is the path carried by the underlying cause.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field }
            | Self::NullField { field }
            | Self::InvalidField { field, .. }
            | Self::UnrecognizedEnumValue { field, .. } => Some(field),
            Self::UnionDispatch { cause, .. } | Self::UnresolvedUnion { cause, .. } => {
                cause.as_deref().and_then(Self::field)
            }
            Self::MalformedDocument(_) | Self::Configuration(_) => None,
        }
    }

    /// A shape mismatch with an empty path, to be filled by [`Self::within`].
    #[doc(hidden)]
    #[must_use]
    pub fn invalid(expected: &'static str, found: &serde_json::Value) -> Self {
        Self::InvalidField {
            field: String::new(),
            expected,
            found: json_kind(found).to_string(),
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedDocument(err.to_string())
    }
}

fn join_path(parent: &str, child: &str) -> String {
    if child.is_empty() {
        parent.to_string()
    } else if parent.is_empty() {
        child.to_string()
    } else if child.starts_with('[') {
        format!("{parent}{child}")
    } else {
        format!("{parent}.{child}")
    }
}

/// Short name of a JSON value's type, for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_builds_dotted_paths() {
        let err = ModelError::MissingField {
            field: "unit_amount".into(),
        }
        .within("[0]")
        .within("unit_amounts")
        .within("matrix_with_display_name_config");

        assert_eq!(
            err.field(),
            Some("matrix_with_display_name_config.unit_amounts[0].unit_amount")
        );
    }

    #[test]
    fn within_fills_empty_path() {
        let err = ModelError::UnrecognizedEnumValue {
            field: String::new(),
            value: "biannual".into(),
        }
        .within("cadence");

        assert_eq!(err.field(), Some("cadence"));
        assert_eq!(
            err.to_string(),
            "unrecognized value for cadence: \"biannual\""
        );
    }

    #[test]
    fn union_errors_expose_cause_path() {
        let err = ModelError::UnresolvedUnion {
            union: "Price",
            tag: Some("unit".into()),
            cause: Some(Box::new(ModelError::NullField {
                field: "currency".into(),
            })),
        }
        .within("price");

        assert_eq!(err.field(), Some("price.currency"));
    }

    #[test]
    fn malformed_is_untouched_by_within() {
        let err = ModelError::MalformedDocument("eof".into()).within("price");
        assert_eq!(err, ModelError::MalformedDocument("eof".into()));
        assert_eq!(err.field(), None);
    }
}
