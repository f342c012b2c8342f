//! Per-model pricing configuration.
//!
//! Each price carries exactly one of these, stored under `<model_type>_config`.
//! Amounts are decimal strings on the wire.

use orb_billing_core::{model, Decimal};

model! {
    /// Configuration for `unit` pricing.
    pub struct UnitConfig {
        /// Rate per unit of usage.
        unit_amount / with_unit_amount: required Decimal = "unit_amount";
    }
}

model! {
    /// Configuration for `package` pricing.
    pub struct PackageConfig {
        /// Price of one package.
        package_amount / with_package_amount: required Decimal = "package_amount";
        /// Units per package; usage is rounded up to whole packages.
        package_size / with_package_size: required i64 = "package_size";
    }
}

model! {
    /// One cell of a pricing matrix.
    pub struct MatrixValue {
        /// One value per matrix dimension, in dimension order. A null entry
        /// matches usage without that dimension.
        dimension_values / with_dimension_values: required Vec<Option<String>> = "dimension_values";
        /// Rate per unit for usage matching this cell.
        unit_amount / with_unit_amount: required Decimal = "unit_amount";
    }
}

model! {
    /// Configuration for `matrix` pricing.
    pub struct MatrixConfig {
        /// Rate for usage matching no cell.
        default_unit_amount / with_default_unit_amount: required Decimal = "default_unit_amount";
        /// Event properties the matrix is keyed on.
        dimensions / with_dimensions: required Vec<Option<String>> = "dimensions";
        /// Matrix cells.
        matrix_values / with_matrix_values: required Vec<MatrixValue> = "matrix_values";
    }
}

model! {
    /// Configuration for `matrix_with_allocation` pricing.
    pub struct MatrixWithAllocationConfig {
        /// Usage allocated before the matrix applies.
        allocation / with_allocation: required f64 = "allocation";
        /// Rate for usage matching no cell.
        default_unit_amount / with_default_unit_amount: required Decimal = "default_unit_amount";
        /// Event properties the matrix is keyed on.
        dimensions / with_dimensions: required Vec<Option<String>> = "dimensions";
        /// Matrix cells.
        matrix_values / with_matrix_values: required Vec<MatrixValue> = "matrix_values";
    }
}

model! {
    /// One row of a single-dimension matrix with display names.
    pub struct MatrixWithDisplayNameUnitAmount {
        /// Value of the dimension this row matches.
        dimension_value / with_dimension_value: required String = "dimension_value";
        /// Label shown on invoices.
        display_name / with_display_name: required String = "display_name";
        /// Rate per unit for this row.
        unit_amount / with_unit_amount: required Decimal = "unit_amount";
    }
}

model! {
    /// Configuration for `matrix_with_display_name` pricing.
    pub struct MatrixWithDisplayNameConfig {
        /// Event property the matrix is keyed on.
        dimension / with_dimension: required String = "dimension";
        /// Rows of the matrix.
        unit_amounts / with_unit_amounts: required Vec<MatrixWithDisplayNameUnitAmount> = "unit_amounts";
    }
}

model! {
    /// One tier of graduated pricing.
    pub struct Tier {
        /// First unit of the tier, inclusive.
        first_unit / with_first_unit: required f64 = "first_unit";
        /// Last unit of the tier, exclusive. Absent on the final tier.
        last_unit / with_last_unit: optional f64 = "last_unit";
        /// Rate per unit in this tier.
        unit_amount / with_unit_amount: required Decimal = "unit_amount";
    }
}

model! {
    /// Configuration for `tiered` pricing.
    pub struct TieredConfig {
        /// Tiers in ascending order.
        tiers / with_tiers: required Vec<Tier> = "tiers";
    }
}

model! {
    /// One tier of volume pricing.
    pub struct BulkTier {
        /// Rate per unit when total usage falls in this tier.
        unit_amount / with_unit_amount: required Decimal = "unit_amount";
        /// Upper bound of the tier. Absent on the final tier.
        maximum_units / with_maximum_units: optional f64 = "maximum_units";
    }
}

model! {
    /// Configuration for `bulk` pricing.
    pub struct BulkConfig {
        /// Tiers in ascending order.
        tiers / with_tiers: required Vec<BulkTier> = "tiers";
    }
}

model! {
    /// Configuration for `unit_with_percent` pricing.
    pub struct UnitWithPercentConfig {
        /// Percentage of the event's value to charge.
        percent / with_percent: required Decimal = "percent";
        /// Rate per unit.
        unit_amount / with_unit_amount: required Decimal = "unit_amount";
    }
}

model! {
    /// Configuration for `grouped_allocation` pricing.
    pub struct GroupedAllocationConfig {
        /// Usage allocated per group.
        allocation / with_allocation: required Decimal = "allocation";
        /// Event property usage is grouped by.
        grouping_key / with_grouping_key: required String = "grouping_key";
        /// Rate per unit beyond the allocation.
        overage_unit_rate / with_overage_unit_rate: required Decimal = "overage_unit_rate";
    }
}

model! {
    /// Configuration for `package_with_allocation` pricing.
    pub struct PackageWithAllocationConfig {
        /// Allocation granted per package.
        allocation / with_allocation: required Decimal = "allocation";
        /// Price of one package.
        package_amount / with_package_amount: required Decimal = "package_amount";
        /// Units per package.
        package_size / with_package_size: required Decimal = "package_size";
    }
}
