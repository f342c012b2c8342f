//! Conversion-rate configuration for prices billed in a custom pricing unit.

use orb_billing_core::{model, tagged_union};

use crate::price_config::{TieredConfig, UnitConfig};

model! {
    /// A flat conversion rate.
    pub struct UnitConversionRateConfig {
        /// Always `"unit"`.
        conversion_rate_type / with_conversion_rate_type: required String = "conversion_rate_type";
        /// Rate per pricing unit.
        unit_config / with_unit_config: required UnitConfig = "unit_config";
    }
}

model! {
    /// A conversion rate that changes with volume.
    pub struct TieredConversionRateConfig {
        /// Always `"tiered"`.
        conversion_rate_type / with_conversion_rate_type: required String = "conversion_rate_type";
        /// Rate tiers.
        tiered_config / with_tiered_config: required TieredConfig = "tiered_config";
    }
}

tagged_union! {
    /// How a custom pricing unit converts to the invoice currency.
    pub enum ConversionRateConfig: "conversion_rate_type" {
        /// A flat rate.
        Unit(UnitConversionRateConfig) = "unit", unit, as_unit;
        /// A tiered rate.
        Tiered(TieredConversionRateConfig) = "tiered", tiered, as_tiered;
    }
}
