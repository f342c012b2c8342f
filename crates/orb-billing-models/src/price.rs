//! Prices as returned by the API.
//!
//! [`Price`] is a union keyed on `model_type`. Every variant shares the same
//! envelope (identity, cadence, currency, item, conversion settings) and adds
//! one `<model_type>_config` object.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use orb_billing_core::{model, tagged_union, Decimal, Result};

use crate::conversion_rate::ConversionRateConfig;
use crate::enums::{Cadence, PriceType};
use crate::ids::PriceId;
use crate::price_config::{
    BulkConfig, GroupedAllocationConfig, MatrixConfig, MatrixWithAllocationConfig,
    MatrixWithDisplayNameConfig, PackageConfig, PackageWithAllocationConfig, TieredConfig,
    UnitConfig, UnitWithPercentConfig,
};
use crate::shared::{BillableMetricTiny, ItemSlim};

macro_rules! price_model {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(#[$cmeta:meta])*
            $getter:ident / $setter:ident : $config:ty = $wire:literal;
        }
    ) => {
        model! {
            $(#[$meta])*
            pub struct $name {
                /// Price identifier.
                id / with_id: required PriceId = "id";
                /// Display name.
                name / with_name: required String = "name";
                /// Pricing model tag.
                model_type / with_model_type: required String = "model_type";
                /// Billing cadence.
                cadence / with_cadence: required Cadence = "cadence";
                /// Invoice currency (ISO 4217).
                currency / with_currency: required String = "currency";
                /// Usage or fixed.
                price_type / with_price_type: required PriceType = "price_type";
                /// The item charged for.
                item / with_item: required ItemSlim = "item";
                /// Creation time.
                created_at / with_created_at: required DateTime<Utc> = "created_at";
                /// User-defined key/value pairs.
                metadata / with_metadata: required BTreeMap<String, String> = "metadata";
                $(#[$cmeta])*
                $getter / $setter: required $config = $wire;
                /// Identifier in the caller's system.
                external_price_id / with_external_price_id: optional String = "external_price_id";
                /// Quantity for fixed prices.
                fixed_price_quantity / with_fixed_price_quantity: optional f64 = "fixed_price_quantity";
                /// Metric usage is measured by.
                billable_metric / with_billable_metric: optional BillableMetricTiny = "billable_metric";
                /// Flat conversion rate to the invoice currency.
                conversion_rate / with_conversion_rate: optional f64 = "conversion_rate";
                /// Structured conversion rate to the invoice currency.
                conversion_rate_config / with_conversion_rate_config: optional ConversionRateConfig = "conversion_rate_config";
                /// Minimum charge per billing period.
                minimum_amount / with_minimum_amount: optional Decimal = "minimum_amount";
                /// Maximum charge per billing period.
                maximum_amount / with_maximum_amount: optional Decimal = "maximum_amount";
            }
        }
    };
}

price_model! {
    /// A price charging a fixed rate per unit.
    UnitPrice {
        /// Unit pricing.
        unit_config / with_unit_config: UnitConfig = "unit_config";
    }
}

price_model! {
    /// A price charging per package of units.
    PackagePrice {
        /// Package pricing.
        package_config / with_package_config: PackageConfig = "package_config";
    }
}

price_model! {
    /// A price keyed on event dimensions.
    MatrixPrice {
        /// Matrix pricing.
        matrix_config / with_matrix_config: MatrixConfig = "matrix_config";
    }
}

price_model! {
    /// A matrix price with an up-front allocation.
    MatrixWithAllocationPrice {
        /// Matrix pricing with allocation.
        matrix_with_allocation_config / with_matrix_with_allocation_config: MatrixWithAllocationConfig = "matrix_with_allocation_config";
    }
}

price_model! {
    /// A single-dimension matrix price with display names.
    MatrixWithDisplayNamePrice {
        /// Matrix pricing with display names.
        matrix_with_display_name_config / with_matrix_with_display_name_config: MatrixWithDisplayNameConfig = "matrix_with_display_name_config";
    }
}

price_model! {
    /// A graduated price.
    TieredPrice {
        /// Tiered pricing.
        tiered_config / with_tiered_config: TieredConfig = "tiered_config";
    }
}

price_model! {
    /// A volume price.
    BulkPrice {
        /// Bulk pricing.
        bulk_config / with_bulk_config: BulkConfig = "bulk_config";
    }
}

price_model! {
    /// A per-unit price plus a percentage of event value.
    UnitWithPercentPrice {
        /// Unit-with-percent pricing.
        unit_with_percent_config / with_unit_with_percent_config: UnitWithPercentConfig = "unit_with_percent_config";
    }
}

price_model! {
    /// A price with a per-group allocation.
    GroupedAllocationPrice {
        /// Grouped allocation pricing.
        grouped_allocation_config / with_grouped_allocation_config: GroupedAllocationConfig = "grouped_allocation_config";
    }
}

price_model! {
    /// A package price with an allocation.
    PackageWithAllocationPrice {
        /// Package-with-allocation pricing.
        package_with_allocation_config / with_package_with_allocation_config: PackageWithAllocationConfig = "package_with_allocation_config";
    }
}

tagged_union! {
    /// A price, in one of the supported pricing models.
    ///
    /// Prices of models this release does not know decode to
    /// `Price::Unknown` and re-encode unchanged.
    pub enum Price: "model_type" {
        /// `unit` pricing.
        Unit(UnitPrice) = "unit", unit, as_unit;
        /// `package` pricing.
        Package(PackagePrice) = "package", package, as_package;
        /// `matrix` pricing.
        Matrix(MatrixPrice) = "matrix", matrix, as_matrix;
        /// `matrix_with_allocation` pricing.
        MatrixWithAllocation(MatrixWithAllocationPrice) = "matrix_with_allocation", matrix_with_allocation, as_matrix_with_allocation;
        /// `matrix_with_display_name` pricing.
        MatrixWithDisplayName(MatrixWithDisplayNamePrice) = "matrix_with_display_name", matrix_with_display_name, as_matrix_with_display_name;
        /// `tiered` pricing.
        Tiered(TieredPrice) = "tiered", tiered, as_tiered;
        /// `bulk` pricing.
        Bulk(BulkPrice) = "bulk", bulk, as_bulk;
        /// `unit_with_percent` pricing.
        UnitWithPercent(UnitWithPercentPrice) = "unit_with_percent", unit_with_percent, as_unit_with_percent;
        /// `grouped_allocation` pricing.
        GroupedAllocation(GroupedAllocationPrice) = "grouped_allocation", grouped_allocation, as_grouped_allocation;
        /// `package_with_allocation` pricing.
        PackageWithAllocation(PackageWithAllocationPrice) = "package_with_allocation", package_with_allocation, as_package_with_allocation;
    }
}

// Envelope fields every pricing model shares. These read the backing
// document, so they also work on `Price::Unknown`.
impl Price {
    /// Price identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is missing, null or not a string.
    pub fn id(&self) -> Result<PriceId> {
        self.document().required("id")
    }

    /// Display name.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is missing, null or not a string.
    pub fn name(&self) -> Result<String> {
        self.document().required("name")
    }

    /// Billing cadence.
    ///
    /// # Errors
    ///
    /// Returns an error if `cadence` is missing, null or not a string.
    pub fn cadence(&self) -> Result<Cadence> {
        self.document().required("cadence")
    }

    /// Invoice currency.
    ///
    /// # Errors
    ///
    /// Returns an error if `currency` is missing, null or not a string.
    pub fn currency(&self) -> Result<String> {
        self.document().required("currency")
    }
}
