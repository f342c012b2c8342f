//! Core primitives for the Orb billing SDK models.
//!
//! This crate provides the machinery every API model is built from:
//!
//! - **Documents**: [`RawDocument`], the insertion-ordered JSON object that
//!   backs every model, with copy-on-write value semantics
//! - **Fields**: [`FieldValue`] typed decode/encode, [`Decimal`] amounts,
//!   RFC 3339 timestamps, identifiers ([`id_type!`])
//! - **Schemas**: [`Schema`], [`Required`], [`Optional`] and the [`Validate`]
//!   trait; models are declared with [`model!`]
//! - **Enums**: closed tag sets with an unrecognized sentinel ([`wire_enum!`])
//! - **Unions**: the tagged-union codec ([`VariantTable`], [`tagged_union!`])
//! - **Configuration**: [`CodecConfig`] and [`UnionPolicy`]
//!
//! # Laziness
//!
//! Decoding a model only checks that the payload is a JSON object. Field
//! problems surface when a field is read or when [`Validate::validate`] runs,
//! so responses from newer API versions still decode.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod document;
pub mod enums;
pub mod error;
pub mod field;
pub mod ids;
pub mod model;
pub mod schema;
pub mod union;

pub use config::{CodecConfig, UnionPolicy, UNION_POLICY_ENV};
pub use document::RawDocument;
pub use error::{ModelError, Result};
pub use field::{Decimal, FieldValue};
pub use model::Model;
pub use schema::{FieldRule, Optional, Required, Schema, Validate};
pub use union::{Resolution, VariantEntry, VariantTable};

/// Traits needed to work with models, for glob import.
pub mod prelude {
    pub use crate::{FieldValue, Model, Validate};
}

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json::Value;
}
