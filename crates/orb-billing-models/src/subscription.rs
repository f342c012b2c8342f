//! Subscriptions.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use orb_billing_core::{model, Result};

use crate::enums::SubscriptionStatus;
use crate::ids::SubscriptionId;
use crate::price::Price;
use crate::shared::{CustomerMinified, PlanMinified};

model! {
    /// A price active on a subscription for a span of time.
    pub struct PriceInterval {
        /// Interval identifier.
        id / with_id: required String = "id";
        /// Start of the interval.
        start_date / with_start_date: required DateTime<Utc> = "start_date";
        /// Day of the month billing periods start on.
        billing_cycle_day / with_billing_cycle_day: required i64 = "billing_cycle_day";
        /// The price charged during the interval.
        price / with_price: required Price = "price";
        /// End of the interval; open-ended when absent.
        end_date / with_end_date: optional DateTime<Utc> = "end_date";
    }
}

model! {
    /// A customer's subscription to a plan.
    pub struct Subscription {
        /// Subscription identifier.
        id / with_id: required SubscriptionId = "id";
        /// Subscribed customer.
        customer / with_customer: required CustomerMinified = "customer";
        /// Lifecycle state.
        status / with_status: required SubscriptionStatus = "status";
        /// Start time.
        start_date / with_start_date: required DateTime<Utc> = "start_date";
        /// Creation time.
        created_at / with_created_at: required DateTime<Utc> = "created_at";
        /// Days after issue an invoice is due.
        net_terms / with_net_terms: required i64 = "net_terms";
        /// User-defined key/value pairs.
        metadata / with_metadata: required BTreeMap<String, String> = "metadata";
        /// Prices billed on the subscription.
        price_intervals / with_price_intervals: required Vec<PriceInterval> = "price_intervals";
        /// Subscribed plan.
        plan / with_plan: optional PlanMinified = "plan";
        /// End time; open-ended when absent.
        end_date / with_end_date: optional DateTime<Utc> = "end_date";
        /// Start of the current billing period.
        current_billing_period_start_date / with_current_billing_period_start_date: optional DateTime<Utc> = "current_billing_period_start_date";
        /// End of the current billing period.
        current_billing_period_end_date / with_current_billing_period_end_date: optional DateTime<Utc> = "current_billing_period_end_date";
        /// Whether invoices are charged automatically.
        auto_collection / with_auto_collection: optional bool = "auto_collection";
        /// Memo printed on invoices by default.
        default_invoice_memo / with_default_invoice_memo: optional String = "default_invoice_memo";
    }
}

impl Subscription {
    /// Price intervals in effect at `at`.
    ///
    /// An interval is in effect from its start (inclusive) to its end
    /// (exclusive); one without an end never closes.
    ///
    /// # Errors
    ///
    /// Returns an error if `price_intervals` or an interval's dates are
    /// unreadable.
    pub fn intervals_active_at(&self, at: DateTime<Utc>) -> Result<Vec<PriceInterval>> {
        let mut active = Vec::new();
        for interval in self.price_intervals()? {
            let started = interval.start_date()? <= at;
            let open = match interval.end_date()? {
                Some(end) => at < end,
                None => true,
            };
            if started && open {
                active.push(interval);
            }
        }
        Ok(active)
    }
}
