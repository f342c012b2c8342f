//! JSON fixtures shared by the integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};

/// A response-shape price of the given model.
pub fn price_json(model_type: &str, config: Value) -> Value {
    let mut price = json!({
        "id": format!("price_{model_type}"),
        "name": "API calls",
        "model_type": model_type,
        "cadence": "monthly",
        "currency": "USD",
        "price_type": "usage_price",
        "item": { "id": "it_1", "name": "API calls" },
        "created_at": "2024-03-01T00:00:00Z",
        "metadata": {},
        "external_price_id": null,
        "conversion_rate": null
    });
    price[format!("{model_type}_config")] = config;
    price
}

/// A valid config for every known pricing model.
pub fn configs() -> Vec<(&'static str, Value)> {
    vec![
        ("unit", json!({ "unit_amount": "0.01" })),
        ("package", json!({ "package_amount": "5.00", "package_size": 100 })),
        (
            "matrix",
            json!({
                "default_unit_amount": "0.00",
                "dimensions": ["region"],
                "matrix_values": [{ "dimension_values": ["us"], "unit_amount": "1.00" }]
            }),
        ),
        (
            "matrix_with_allocation",
            json!({
                "allocation": 1000.0,
                "default_unit_amount": "0.00",
                "dimensions": ["region", null],
                "matrix_values": [{ "dimension_values": ["eu", null], "unit_amount": "2.00" }]
            }),
        ),
        (
            "matrix_with_display_name",
            json!({
                "dimension": "region",
                "unit_amounts": [{ "dimension_value": "us", "display_name": "US", "unit_amount": "1.50" }]
            }),
        ),
        (
            "tiered",
            json!({
                "tiers": [
                    { "first_unit": 0.0, "last_unit": 1000.0, "unit_amount": "0.10" },
                    { "first_unit": 1000.0, "last_unit": null, "unit_amount": "0.05" }
                ]
            }),
        ),
        (
            "bulk",
            json!({
                "tiers": [
                    { "unit_amount": "0.10", "maximum_units": 1000.0 },
                    { "unit_amount": "0.05" }
                ]
            }),
        ),
        ("unit_with_percent", json!({ "percent": "2.5", "unit_amount": "0.30" })),
        (
            "grouped_allocation",
            json!({ "allocation": "100", "grouping_key": "workspace_id", "overage_unit_rate": "0.02" }),
        ),
        (
            "package_with_allocation",
            json!({ "allocation": "1000", "package_amount": "10.00", "package_size": "100" }),
        ),
    ]
}

/// A `unit` price.
pub fn unit_price_json() -> Value {
    price_json("unit", json!({ "unit_amount": "0.01" }))
}

/// An invoice with one unit-priced line item.
pub fn invoice_json() -> Value {
    json!({
        "id": "inv_1",
        "invoice_number": "INV-0001",
        "status": "issued",
        "currency": "USD",
        "amount_due": "12.50",
        "subtotal": "12.50",
        "total": "12.50",
        "created_at": "2024-04-01T00:00:00Z",
        "customer": { "id": "cus_1", "external_customer_id": "acme" },
        "line_items": [{
            "id": "li_1",
            "name": "API calls",
            "amount": "12.50",
            "subtotal": "12.50",
            "quantity": 1250.0,
            "start_date": "2024-03-01T00:00:00Z",
            "end_date": "2024-04-01T00:00:00Z",
            "price": unit_price_json()
        }],
        "metadata": { "region": "us" },
        "due_date": "2024-04-15T00:00:00Z",
        "paid_at": null,
        "memo": null,
        "subscription": { "id": "sub_1" }
    })
}

/// A refund credit note against `inv_1`.
pub fn credit_note_json() -> Value {
    json!({
        "id": "cn_1",
        "credit_note_number": "CN-0001",
        "created_at": "2024-04-10T00:00:00Z",
        "customer": { "id": "cus_1" },
        "invoice_id": "inv_1",
        "subtotal": "2.50",
        "total": "2.50",
        "type": "refund",
        "reason": "duplicate",
        "line_items": [{
            "id": "cnli_1",
            "name": "API calls",
            "amount": "2.50",
            "subtotal": "2.50",
            "item_id": "it_1",
            "quantity": 250.0
        }]
    })
}

/// An active subscription with one closed and one open price interval.
pub fn subscription_json() -> Value {
    json!({
        "id": "sub_1",
        "customer": { "id": "cus_1" },
        "status": "active",
        "start_date": "2024-01-01T00:00:00Z",
        "created_at": "2023-12-20T09:30:00Z",
        "net_terms": 30,
        "metadata": {},
        "plan": { "id": "plan_1", "name": "Growth" },
        "auto_collection": true,
        "price_intervals": [
            {
                "id": "pi_1",
                "start_date": "2024-01-01T00:00:00Z",
                "end_date": "2024-03-01T00:00:00Z",
                "billing_cycle_day": 1,
                "price": price_json("package", json!({ "package_amount": "5.00", "package_size": 100 }))
            },
            {
                "id": "pi_2",
                "start_date": "2024-03-01T00:00:00Z",
                "end_date": null,
                "billing_cycle_day": 1,
                "price": unit_price_json()
            }
        ]
    })
}
