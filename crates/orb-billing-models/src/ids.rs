//! Resource identifiers.

use orb_billing_core::id_type;

id_type!(CustomerId, "Unique identifier for a customer.");
id_type!(InvoiceId, "Unique identifier for an invoice.");
id_type!(CreditNoteId, "Unique identifier for a credit note.");
id_type!(PriceId, "Unique identifier for a price.");
id_type!(SubscriptionId, "Unique identifier for a subscription.");
id_type!(ItemId, "Unique identifier for an item.");
id_type!(PlanId, "Unique identifier for a plan.");
