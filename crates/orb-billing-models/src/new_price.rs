//! Request bodies for creating prices.
//!
//! [`NewFloatingPrice`] mirrors [`Price`](crate::Price) but carries only
//! what a caller supplies: no identifier, no timestamps, and the item by ID.

use std::collections::BTreeMap;

use orb_billing_core::{model, tagged_union};

use crate::conversion_rate::ConversionRateConfig;
use crate::enums::Cadence;
use crate::ids::ItemId;
use crate::price_config::{
    BulkConfig, GroupedAllocationConfig, MatrixConfig, MatrixWithAllocationConfig,
    MatrixWithDisplayNameConfig, PackageConfig, PackageWithAllocationConfig, TieredConfig,
    UnitConfig, UnitWithPercentConfig,
};

macro_rules! new_price_model {
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
                /// Billing cadence.
                cadence / with_cadence: required Cadence = "cadence";
                /// Invoice currency (ISO 4217).
                currency / with_currency: required String = "currency";
                /// Item to charge for.
                item_id / with_item_id: required ItemId = "item_id";
                /// Pricing model tag.
                model_type / with_model_type: required String = "model_type";
                /// Display name.
                name / with_name: required String = "name";
                $(#[$cmeta])*
                $getter / $setter: required $config = $wire;
                /// Metric to measure usage by.
                billable_metric_id / with_billable_metric_id: optional String = "billable_metric_id";
                /// Bill at the start of the period instead of the end.
                billed_in_advance / with_billed_in_advance: optional bool = "billed_in_advance";
                /// Flat conversion rate to the invoice currency.
                conversion_rate / with_conversion_rate: optional f64 = "conversion_rate";
                /// Structured conversion rate to the invoice currency.
                conversion_rate_config / with_conversion_rate_config: optional ConversionRateConfig = "conversion_rate_config";
                /// Identifier in the caller's system.
                external_price_id / with_external_price_id: optional String = "external_price_id";
                /// Quantity for fixed prices.
                fixed_price_quantity / with_fixed_price_quantity: optional f64 = "fixed_price_quantity";
                /// Property to split invoice line items by.
                invoice_grouping_key / with_invoice_grouping_key: optional String = "invoice_grouping_key";
                /// User-defined key/value pairs; a null value deletes the key.
                metadata / with_metadata: optional BTreeMap<String, Option<String>> = "metadata";
            }
        }
    };
}

new_price_model! {
    /// A new `unit` price.
    NewUnitPrice {
        /// Unit pricing.
        unit_config / with_unit_config: UnitConfig = "unit_config";
    }
}

new_price_model! {
    /// A new `package` price.
    NewPackagePrice {
        /// Package pricing.
        package_config / with_package_config: PackageConfig = "package_config";
    }
}

new_price_model! {
    /// A new `matrix` price.
    NewMatrixPrice {
        /// Matrix pricing.
        matrix_config / with_matrix_config: MatrixConfig = "matrix_config";
    }
}

new_price_model! {
    /// A new `matrix_with_allocation` price.
    NewMatrixWithAllocationPrice {
        /// Matrix pricing with allocation.
        matrix_with_allocation_config / with_matrix_with_allocation_config: MatrixWithAllocationConfig = "matrix_with_allocation_config";
    }
}

new_price_model! {
    /// A new `matrix_with_display_name` price.
    NewMatrixWithDisplayNamePrice {
        /// Matrix pricing with display names.
        matrix_with_display_name_config / with_matrix_with_display_name_config: MatrixWithDisplayNameConfig = "matrix_with_display_name_config";
    }
}

new_price_model! {
    /// A new `tiered` price.
    NewTieredPrice {
        /// Tiered pricing.
        tiered_config / with_tiered_config: TieredConfig = "tiered_config";
    }
}

new_price_model! {
    /// A new `bulk` price.
    NewBulkPrice {
        /// Bulk pricing.
        bulk_config / with_bulk_config: BulkConfig = "bulk_config";
    }
}

new_price_model! {
    /// A new `unit_with_percent` price.
    NewUnitWithPercentPrice {
        /// Unit-with-percent pricing.
        unit_with_percent_config / with_unit_with_percent_config: UnitWithPercentConfig = "unit_with_percent_config";
    }
}

new_price_model! {
    /// A new `grouped_allocation` price.
    NewGroupedAllocationPrice {
        /// Grouped allocation pricing.
        grouped_allocation_config / with_grouped_allocation_config: GroupedAllocationConfig = "grouped_allocation_config";
    }
}

new_price_model! {
    /// A new `package_with_allocation` price.
    NewPackageWithAllocationPrice {
        /// Package-with-allocation pricing.
        package_with_allocation_config / with_package_with_allocation_config: PackageWithAllocationConfig = "package_with_allocation_config";
    }
}

tagged_union! {
    /// A price to create, not attached to any plan.
    pub enum NewFloatingPrice: "model_type" {
        /// `unit` pricing.
        Unit(NewUnitPrice) = "unit", unit, as_unit;
        /// `package` pricing.
        Package(NewPackagePrice) = "package", package, as_package;
        /// `matrix` pricing.
        Matrix(NewMatrixPrice) = "matrix", matrix, as_matrix;
        /// `matrix_with_allocation` pricing.
        MatrixWithAllocation(NewMatrixWithAllocationPrice) = "matrix_with_allocation", matrix_with_allocation, as_matrix_with_allocation;
        /// `matrix_with_display_name` pricing.
        MatrixWithDisplayName(NewMatrixWithDisplayNamePrice) = "matrix_with_display_name", matrix_with_display_name, as_matrix_with_display_name;
        /// `tiered` pricing.
        Tiered(NewTieredPrice) = "tiered", tiered, as_tiered;
        /// `bulk` pricing.
        Bulk(NewBulkPrice) = "bulk", bulk, as_bulk;
        /// `unit_with_percent` pricing.
        UnitWithPercent(NewUnitWithPercentPrice) = "unit_with_percent", unit_with_percent, as_unit_with_percent;
        /// `grouped_allocation` pricing.
        GroupedAllocation(NewGroupedAllocationPrice) = "grouped_allocation", grouped_allocation, as_grouped_allocation;
        /// `package_with_allocation` pricing.
        PackageWithAllocation(NewPackageWithAllocationPrice) = "package_with_allocation", package_with_allocation, as_package_with_allocation;
    }
}
