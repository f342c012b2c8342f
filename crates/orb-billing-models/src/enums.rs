//! Wire enums shared across resources.
//!
//! Each enum also carries `Unrecognized(String)` for values added to the API
//! after this release.

use orb_billing_core::wire_enum;

wire_enum! {
    /// How often a price is billed.
    pub enum Cadence {
        /// Once a year.
        Annual = "annual",
        /// Twice a year.
        SemiAnnual = "semi_annual",
        /// Once a month.
        Monthly = "monthly",
        /// Once a quarter.
        Quarterly = "quarterly",
        /// A single charge.
        OneTime = "one_time",
        /// A custom billing interval.
        Custom = "custom",
    }
}

wire_enum! {
    /// Whether a price is driven by usage or fixed.
    pub enum PriceType {
        /// Charged on reported usage.
        UsagePrice = "usage_price",
        /// Charged at a fixed quantity.
        FixedPrice = "fixed_price",
    }
}

wire_enum! {
    /// Lifecycle state of an invoice.
    pub enum InvoiceStatus {
        /// Issued to the customer.
        Issued = "issued",
        /// Paid in full.
        Paid = "paid",
        /// Synced to an external accounting provider.
        Synced = "synced",
        /// Voided.
        Void = "void",
        /// Not yet issued.
        Draft = "draft",
    }
}

wire_enum! {
    /// Kind of credit note.
    pub enum CreditNoteType {
        /// Money is returned to the customer.
        Refund = "refund",
        /// The invoice balance is adjusted.
        Adjustment = "adjustment",
    }
}

wire_enum! {
    /// Why a credit note was issued.
    pub enum CreditNoteReason {
        /// Duplicate charge.
        Duplicate = "duplicate",
        /// Fraudulent charge.
        Fraudulent = "fraudulent",
        /// The order changed.
        OrderChange = "order_change",
        /// The customer was not satisfied.
        ProductUnsatisfactory = "product_unsatisfactory",
    }
}

wire_enum! {
    /// Lifecycle state of a subscription.
    pub enum SubscriptionStatus {
        /// Currently billing.
        Active = "active",
        /// No longer billing.
        Ended = "ended",
        /// Starts in the future.
        Upcoming = "upcoming",
    }
}
