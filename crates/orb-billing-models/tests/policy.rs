//! Process-wide union policy.
//!
//! Installing a policy is global, so this file holds the only tests that
//! depend on it.

mod common;

use common::{invoice_json, price_json};
use orb_billing_models::{CodecConfig, Invoice, Model, ModelError, Price, UnionPolicy};
use serde_json::json;

#[test]
fn test_installed_raise_policy_applies_to_nested_reads() {
    CodecConfig::new()
        .with_union_policy(UnionPolicy::Raise)
        .install()
        .unwrap();
    assert_eq!(CodecConfig::current().union_policy, UnionPolicy::Raise);
    assert!(CodecConfig::default().install().is_err());

    // Unknown tags are still tolerated.
    assert!(Price::decode(price_json("bps", json!({ "bps": 5 })))
        .unwrap()
        .is_unknown());

    // A known tag with a bad payload is not.
    let mut raw = invoice_json();
    raw["line_items"][0]["price"]["unit_config"] = json!({});
    let invoice = Invoice::from_value(raw.clone()).unwrap();

    let err = invoice.line_items().unwrap()[0].price().unwrap_err();
    assert!(matches!(err, ModelError::UnionDispatch { union: "Price", .. }));
    assert_eq!(err.field(), Some("price.unit_config.unit_amount"));

    // Decoding a whole invoice stays lazy.
    assert_eq!(invoice.to_value(), raw);
    assert!(serde_json::from_value::<Price>(raw["line_items"][0]["price"].clone()).is_err());
}
