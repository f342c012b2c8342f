//! Invoices.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use orb_billing_core::{model, Decimal, Result};

use crate::enums::InvoiceStatus;
use crate::ids::InvoiceId;
use crate::price::Price;
use crate::shared::{CustomerMinified, SubscriptionMinified};

model! {
    /// A charge on an invoice for one price over one period.
    pub struct InvoiceLineItem {
        /// Line item identifier.
        id / with_id: required String = "id";
        /// Display name.
        name / with_name: required String = "name";
        /// Final amount after adjustments.
        amount / with_amount: required Decimal = "amount";
        /// Amount before adjustments.
        subtotal / with_subtotal: required Decimal = "subtotal";
        /// Billed quantity.
        quantity / with_quantity: required f64 = "quantity";
        /// Start of the billed period.
        start_date / with_start_date: required DateTime<Utc> = "start_date";
        /// End of the billed period.
        end_date / with_end_date: required DateTime<Utc> = "end_date";
        /// The price that produced this charge.
        price / with_price: required Price = "price";
    }
}

model! {
    /// An invoice issued to a customer.
    pub struct Invoice {
        /// Invoice identifier.
        id / with_id: required InvoiceId = "id";
        /// Human-readable invoice number.
        invoice_number / with_invoice_number: required String = "invoice_number";
        /// Lifecycle state.
        status / with_status: required InvoiceStatus = "status";
        /// Currency (ISO 4217).
        currency / with_currency: required String = "currency";
        /// Amount still owed.
        amount_due / with_amount_due: required Decimal = "amount_due";
        /// Total before discounts and credits.
        subtotal / with_subtotal: required Decimal = "subtotal";
        /// Total after discounts and credits.
        total / with_total: required Decimal = "total";
        /// Creation time.
        created_at / with_created_at: required DateTime<Utc> = "created_at";
        /// Billed customer.
        customer / with_customer: required CustomerMinified = "customer";
        /// Charges on the invoice.
        line_items / with_line_items: required Vec<InvoiceLineItem> = "line_items";
        /// User-defined key/value pairs.
        metadata / with_metadata: required BTreeMap<String, String> = "metadata";
        /// Payment due time.
        due_date / with_due_date: optional DateTime<Utc> = "due_date";
        /// Time the invoice was paid.
        paid_at / with_paid_at: optional DateTime<Utc> = "paid_at";
        /// Time the invoice was voided.
        voided_at / with_voided_at: optional DateTime<Utc> = "voided_at";
        /// Free-form memo printed on the invoice.
        memo / with_memo: optional String = "memo";
        /// Link to the rendered PDF.
        invoice_pdf / with_invoice_pdf: optional String = "invoice_pdf";
        /// Subscription the invoice was generated for.
        subscription / with_subscription: optional SubscriptionMinified = "subscription";
    }
}

impl Invoice {
    /// Line items whose price resolved to a known pricing model.
    ///
    /// # Errors
    ///
    /// Returns an error if `line_items` or any item's `price` is unreadable.
    pub fn priced_line_items(&self) -> Result<Vec<InvoiceLineItem>> {
        let mut priced = Vec::new();
        for item in self.line_items()? {
            if !item.price()?.is_unknown() {
                priced.push(item);
            }
        }
        Ok(priced)
    }
}
