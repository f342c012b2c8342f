//! Price union decoding, validation and encoding.

mod common;

use common::{configs, price_json, unit_price_json};
use orb_billing_models::new_price::NewUnitPrice;
use orb_billing_models::price::UnitPrice;
use orb_billing_models::{
    Cadence, ConversionRateConfig, FieldValue, Model, ModelError, NewFloatingPrice, Price,
    UnionPolicy, Validate,
};
use serde_json::{json, Value};

fn pickers(price: &Price) -> Vec<(&'static str, bool)> {
    vec![
        ("unit", price.as_unit().is_some()),
        ("package", price.as_package().is_some()),
        ("matrix", price.as_matrix().is_some()),
        ("matrix_with_allocation", price.as_matrix_with_allocation().is_some()),
        ("matrix_with_display_name", price.as_matrix_with_display_name().is_some()),
        ("tiered", price.as_tiered().is_some()),
        ("bulk", price.as_bulk().is_some()),
        ("unit_with_percent", price.as_unit_with_percent().is_some()),
        ("grouped_allocation", price.as_grouped_allocation().is_some()),
        ("package_with_allocation", price.as_package_with_allocation().is_some()),
    ]
}

// ============================================================================
// Round-trip
// ============================================================================

#[test]
fn test_every_known_model_roundtrips() {
    for (model_type, config) in configs() {
        let raw = price_json(model_type, config);
        let price = Price::decode_with(raw.clone(), UnionPolicy::Raise).unwrap();

        assert_eq!(price.discriminator(), Some(model_type));
        assert!(!price.is_unknown(), "{model_type} did not resolve");
        assert!(price.validate().is_ok(), "{model_type} failed validation");
        assert_eq!(price.to_value(), raw);
        assert_eq!(Price::decode(price.to_value()).unwrap(), price);
    }
}

#[test]
fn test_serde_roundtrip_through_text() {
    let price: Price = serde_json::from_value(unit_price_json()).unwrap();
    let text = serde_json::to_string(&price).unwrap();
    let again: Price = serde_json::from_str(&text).unwrap();
    assert_eq!(again, price);
}

#[test]
fn test_builder_output_decodes_to_equal_value() {
    let unit = Price::decode(unit_price_json()).unwrap();
    let unit = unit.as_unit().unwrap().clone();
    let renamed = unit.with_name("Renamed".into()).unwrap();
    let price = Price::unit(renamed);

    assert_eq!(price.name().unwrap(), "Renamed");
    assert_eq!(Price::decode(price.to_value()).unwrap(), price);
}

// ============================================================================
// Discriminator consistency
// ============================================================================

#[test]
fn test_variant_holding_foreign_tag_fails_validation() {
    let mut raw = unit_price_json();
    raw["model_type"] = json!("package");
    let price = Price::Unit(UnitPrice::from_value(raw).unwrap());

    let err = price.validate().unwrap_err();
    assert!(matches!(
        err,
        ModelError::UnresolvedUnion { union: "Price", tag: Some(ref tag), .. } if tag == "package"
    ));
    assert_eq!(err.field(), Some("model_type"));
    assert_ne!(Price::decode(price.to_value()).unwrap(), price);
}

#[test]
fn test_setter_rewritten_tag_fails_validation() {
    let unit = Price::decode(unit_price_json()).unwrap();
    let rewritten = unit
        .as_unit()
        .unwrap()
        .clone()
        .with_model_type("tiered".into())
        .unwrap();

    assert_eq!(
        Price::Unit(rewritten.clone()).validate().unwrap_err().field(),
        Some("model_type")
    );

    let price = Price::unit(rewritten);
    assert!(price.validate().is_ok());
    assert_eq!(Price::decode(price.to_value()).unwrap(), price);
}

#[test]
fn test_nested_conversion_rate_tag_is_checked() {
    let mut raw = unit_price_json();
    raw["conversion_rate_config"] = json!({
        "conversion_rate_type": "tiered",
        "unit_config": { "unit_amount": "1.2" }
    });
    let conversion = UnitPrice::from_value(raw.clone())
        .unwrap()
        .conversion_rate_config()
        .unwrap()
        .unwrap();
    assert!(conversion.is_unknown());

    raw["conversion_rate_config"]["conversion_rate_type"] = json!("unit");
    let resolved = UnitPrice::from_value(raw)
        .unwrap()
        .conversion_rate_config()
        .unwrap()
        .unwrap();
    let forged = ConversionRateConfig::Unit(
        resolved
            .as_unit()
            .unwrap()
            .clone()
            .with_conversion_rate_type("tiered".into())
            .unwrap(),
    );
    assert_eq!(
        forged.validate().unwrap_err().field(),
        Some("conversion_rate_type")
    );
}

// ============================================================================
// Unknown preservation
// ============================================================================

#[test]
fn test_unknown_model_type_preserved_verbatim() {
    let raw = price_json(
        "tiered_package",
        json!({ "tiers": [{ "per_unit": "1.00", "tier_lower_bound": "0" }], "package_size": 10 }),
    );

    for policy in [UnionPolicy::FallbackUnknown, UnionPolicy::Raise] {
        let price = Price::decode_with(raw.clone(), policy).unwrap();
        assert!(price.is_unknown());
        assert!(pickers(&price).iter().all(|(_, picked)| !picked));
        assert_eq!(price.to_value(), raw);
        assert_eq!(serde_json::to_value(&price).unwrap(), raw);
    }
}

#[test]
fn test_unknown_model_fails_validation_and_resolution() {
    let price = Price::decode(price_json("bps", json!({ "bps": 15 }))).unwrap();

    assert_eq!(
        price.validate(),
        Err(ModelError::UnresolvedUnion {
            union: "Price",
            tag: Some("bps".into()),
            cause: None,
        })
    );
    assert!(matches!(
        price.resolved(),
        Err(ModelError::UnionDispatch { union: "Price", .. })
    ));
}

#[test]
fn test_missing_discriminator_is_unknown() {
    let mut raw = unit_price_json();
    raw.as_object_mut().unwrap().remove("model_type");

    let price = Price::decode_with(raw.clone(), UnionPolicy::Raise).unwrap();
    assert!(price.is_unknown());
    assert_eq!(price.discriminator(), None);
    assert_eq!(price.to_value(), raw);
}

#[test]
fn test_non_object_is_malformed() {
    for raw in [json!("unit"), json!(null), json!([unit_price_json()])] {
        assert!(matches!(
            Price::decode(raw),
            Err(ModelError::MalformedDocument(_))
        ));
    }
    assert!(matches!(
        <Price as FieldValue>::decode(&json!(7)),
        Err(ModelError::InvalidField { .. })
    ));
}

// ============================================================================
// Required-field enforcement
// ============================================================================

#[test]
fn test_removing_required_field_names_it() {
    let fixture = unit_price_json();

    for field in UnitPrice::SCHEMA.required_fields() {
        let mut raw = fixture.clone();
        raw.as_object_mut().unwrap().remove(field);

        let unit = UnitPrice::from_value(raw.clone()).unwrap();
        assert_eq!(
            unit.validate(),
            Err(ModelError::MissingField {
                field: field.to_string()
            })
        );

        let price = Price::decode(raw).unwrap();
        assert!(price.is_unknown(), "{field} removed but price resolved");
        let err = price.validate().unwrap_err();
        if field == "model_type" {
            assert_eq!(err.field(), None);
        } else {
            assert_eq!(err.field(), Some(field));
        }
    }
}

#[test]
fn test_null_required_field_is_distinct_from_missing() {
    let mut raw = unit_price_json();
    raw["currency"] = Value::Null;

    let unit = UnitPrice::from_value(raw).unwrap();
    assert_eq!(
        unit.currency(),
        Err(ModelError::NullField {
            field: "currency".into()
        })
    );
}

#[test]
fn test_raise_policy_reports_cause() {
    let raw = price_json("unit", json!({}));
    let err = Price::decode_with(raw.clone(), UnionPolicy::Raise).unwrap_err();

    assert!(matches!(
        err,
        ModelError::UnionDispatch { union: "Price", tag: Some(ref tag), cause: Some(_) } if tag == "unit"
    ));
    assert_eq!(err.field(), Some("unit_config.unit_amount"));

    let fallback = Price::decode_with(raw, UnionPolicy::FallbackUnknown).unwrap();
    assert_eq!(
        fallback.validate().unwrap_err().field(),
        Some("unit_config.unit_amount")
    );
}

// ============================================================================
// Enum forward compatibility
// ============================================================================

#[test]
fn test_unknown_cadence_decodes_and_fails_validation() {
    let request = NewUnitPrice::from_value(json!({ "cadence": "biannual" })).unwrap();

    assert_eq!(
        request.cadence().unwrap(),
        Cadence::Unrecognized("biannual".into())
    );
    assert_eq!(
        request.validate(),
        Err(ModelError::UnrecognizedEnumValue {
            field: "cadence".into(),
            value: "biannual".into(),
        })
    );
}

#[test]
fn test_unknown_cadence_on_response_price() {
    let mut raw = unit_price_json();
    raw["cadence"] = json!("biannual");

    let unit = UnitPrice::from_value(raw.clone()).unwrap();
    assert!(matches!(
        unit.validate(),
        Err(ModelError::UnrecognizedEnumValue { ref field, .. }) if field == "cadence"
    ));

    let price = Price::decode(raw.clone()).unwrap();
    assert!(price.is_unknown());
    assert_eq!(price.cadence().unwrap().to_string(), "biannual");
    assert_eq!(price.to_value(), raw);
}

// ============================================================================
// Dispatch determinism
// ============================================================================

#[test]
fn test_unit_resolves_only_to_unit() {
    for _ in 0..3 {
        let price = Price::decode(unit_price_json()).unwrap();
        let picked: Vec<_> = pickers(&price)
            .into_iter()
            .filter(|(_, picked)| *picked)
            .map(|(tag, _)| tag)
            .collect();
        assert_eq!(picked, ["unit"]);
        assert!(matches!(price, Price::Unit(_)));
    }
}

#[test]
fn test_dispatch_ignores_shape_of_other_variants() {
    // A valid package config under a unit tag must not resolve as a package.
    let mut raw = unit_price_json();
    let object = raw.as_object_mut().unwrap();
    object.remove("unit_config");
    object.insert(
        "package_config".into(),
        json!({ "package_amount": "5.00", "package_size": 100 }),
    );

    let price = Price::decode(raw).unwrap();
    assert!(price.is_unknown());
    assert_eq!(price.discriminator(), Some("unit"));
}

// ============================================================================
// Nested unions
// ============================================================================

#[test]
fn test_conversion_rate_config_resolves_inside_price() {
    let mut raw = unit_price_json();
    raw["conversion_rate_config"] = json!({
        "conversion_rate_type": "unit",
        "unit_config": { "unit_amount": "1.2" }
    });

    let price = Price::decode(raw).unwrap();
    let unit = price.as_unit().unwrap();
    let conversion = unit.conversion_rate_config().unwrap().unwrap();
    assert!(conversion.as_unit().is_some());
    assert!(price.validate().is_ok());
}

#[test]
fn test_unknown_conversion_rate_keeps_price_unresolved() {
    let mut raw = unit_price_json();
    raw["conversion_rate_config"] = json!({ "conversion_rate_type": "graduated", "steps": [] });

    let unit = UnitPrice::from_value(raw.clone()).unwrap();
    assert!(unit.conversion_rate_config().unwrap().unwrap().is_unknown());
    assert!(matches!(
        unit.validate(),
        Err(ModelError::UnresolvedUnion { union: "ConversionRateConfig", .. })
    ));
    assert!(Price::decode(raw).unwrap().is_unknown());
}

// ============================================================================
// Scenario: matrix_with_display_name request
// ============================================================================

#[test]
fn test_matrix_with_display_name_request() {
    let text = r#"{
        "model_type": "matrix_with_display_name",
        "cadence": "monthly",
        "currency": "USD",
        "item_id": "it_1",
        "matrix_with_display_name_config": {
            "dimension": "region",
            "unit_amounts": [
                { "dimension_value": "us", "display_name": "US", "unit_amount": "1.50" }
            ]
        },
        "model_type": "matrix_with_display_name",
        "name": "Usage"
    }"#;
    let raw: Value = serde_json::from_str(text).unwrap();

    let price = NewFloatingPrice::decode_with(raw.clone(), UnionPolicy::Raise).unwrap();
    let matrix = price.as_matrix_with_display_name().unwrap();
    assert!(price.as_unit().is_none());
    assert!(price.validate().is_ok());

    let config = matrix.matrix_with_display_name_config().unwrap();
    assert_eq!(config.dimension().unwrap(), "region");
    let rows = config.unit_amounts().unwrap();
    assert_eq!(rows[0].display_name().unwrap(), "US");
    assert_eq!(rows[0].unit_amount().unwrap().as_str(), "1.50");

    assert_eq!(price.to_value(), raw);
    assert_eq!(
        NewFloatingPrice::decode(price.to_value()).unwrap(),
        price
    );
}
