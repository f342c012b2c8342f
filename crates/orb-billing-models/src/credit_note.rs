//! Credit notes.

use chrono::{DateTime, Utc};
use orb_billing_core::{model, Decimal};

use crate::enums::{CreditNoteReason, CreditNoteType};
use crate::ids::{CreditNoteId, InvoiceId, ItemId};
use crate::shared::CustomerMinified;

model! {
    /// An amount credited against one invoice line item.
    pub struct CreditNoteLineItem {
        /// Line item identifier.
        id / with_id: required String = "id";
        /// Display name.
        name / with_name: required String = "name";
        /// Credited amount after adjustments.
        amount / with_amount: required Decimal = "amount";
        /// Credited amount before adjustments.
        subtotal / with_subtotal: required Decimal = "subtotal";
        /// Item the credited charge was for.
        item_id / with_item_id: required ItemId = "item_id";
        /// Credited quantity.
        quantity / with_quantity: optional f64 = "quantity";
    }
}

model! {
    /// A credit note reducing what a customer owes on an invoice.
    pub struct CreditNote {
        /// Credit note identifier.
        id / with_id: required CreditNoteId = "id";
        /// Human-readable credit note number.
        credit_note_number / with_credit_note_number: required String = "credit_note_number";
        /// Creation time.
        created_at / with_created_at: required DateTime<Utc> = "created_at";
        /// Credited customer.
        customer / with_customer: required CustomerMinified = "customer";
        /// Invoice being credited.
        invoice_id / with_invoice_id: required InvoiceId = "invoice_id";
        /// Total before adjustments.
        subtotal / with_subtotal: required Decimal = "subtotal";
        /// Total after adjustments.
        total / with_total: required Decimal = "total";
        /// Refund or adjustment.
        credit_note_type / with_credit_note_type: required CreditNoteType = "type";
        /// Credited line items.
        line_items / with_line_items: required Vec<CreditNoteLineItem> = "line_items";
        /// Why the note was issued.
        reason / with_reason: optional CreditNoteReason = "reason";
        /// Free-form memo.
        memo / with_memo: optional String = "memo";
        /// Link to the rendered PDF.
        credit_note_pdf / with_credit_note_pdf: optional String = "credit_note_pdf";
        /// Minimum amount refunded.
        minimum_amount_refunded / with_minimum_amount_refunded: optional Decimal = "minimum_amount_refunded";
    }
}
