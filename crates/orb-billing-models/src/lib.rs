//! Orb billing API models.
//!
//! Typed views over the JSON resources of the Orb billing API: prices and
//! their pricing-model configs, conversion-rate configs, invoices, credit
//! notes, subscriptions and list envelopes.
//!
//! Every model wraps the JSON it was decoded from. Decoding never fails on
//! unknown fields, new enum values or new price models; call
//! [`Validate::validate`] when the payload must be complete.
//!
//! # Example
//!
//! ```
//! use orb_billing_models::{Price, Validate};
//! use serde_json::json;
//!
//! let price = Price::decode(json!({
//!     "id": "price_1",
//!     "name": "API calls",
//!     "model_type": "unit",
//!     "cadence": "monthly",
//!     "currency": "USD",
//!     "price_type": "usage_price",
//!     "created_at": "2024-01-01T00:00:00Z",
//!     "item": { "id": "it_1", "name": "API calls" },
//!     "metadata": {},
//!     "unit_config": { "unit_amount": "0.01" }
//! }))?;
//!
//! let unit = price.as_unit().expect("a unit price");
//! assert_eq!(unit.unit_config()?.unit_amount()?.as_str(), "0.01");
//! price.validate()?;
//! # Ok::<(), orb_billing_models::ModelError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod conversion_rate;
pub mod credit_note;
pub mod enums;
pub mod ids;
pub mod invoice;
pub mod new_price;
pub mod price;
pub mod price_config;
pub mod shared;
pub mod subscription;

pub use conversion_rate::ConversionRateConfig;
pub use credit_note::{CreditNote, CreditNoteLineItem};
pub use enums::*;
pub use ids::*;
pub use invoice::{Invoice, InvoiceLineItem};
pub use new_price::NewFloatingPrice;
pub use price::Price;
pub use shared::*;
pub use subscription::{PriceInterval, Subscription};

pub use orb_billing_core::{
    CodecConfig, Decimal, FieldValue, Model, ModelError, RawDocument, Result, UnionPolicy,
    Validate,
};
