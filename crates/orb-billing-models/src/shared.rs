//! Minified references and the list envelope.
//!
//! Resources embed short references to related resources rather than the
//! full objects. List endpoints wrap results in a [`Page`].

use std::fmt;
use std::marker::PhantomData;

use orb_billing_core::{
    model, FieldRule, FieldValue, ModelError, RawDocument, Required, Result, Validate,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::ids::{CustomerId, ItemId, PlanId, SubscriptionId};

model! {
    /// The item a price charges for.
    pub struct ItemSlim {
        /// Item identifier.
        id / with_id: required ItemId = "id";
        /// Display name.
        name / with_name: required String = "name";
    }
}

model! {
    /// Reference to a customer.
    pub struct CustomerMinified {
        /// Orb customer identifier.
        id / with_id: required CustomerId = "id";
        /// The customer's identifier in the caller's system.
        external_customer_id / with_external_customer_id: optional String = "external_customer_id";
    }
}

model! {
    /// Reference to a subscription.
    pub struct SubscriptionMinified {
        /// Subscription identifier.
        id / with_id: required SubscriptionId = "id";
    }
}

model! {
    /// Reference to a plan.
    pub struct PlanMinified {
        /// Plan identifier.
        id / with_id: required PlanId = "id";
        /// Plan name.
        name / with_name: optional String = "name";
    }
}

model! {
    /// Reference to a billable metric.
    pub struct BillableMetricTiny {
        /// Metric identifier.
        id / with_id: required String = "id";
    }
}

model! {
    /// Cursor state of a list response.
    pub struct PaginationMetadata {
        /// Whether more results follow.
        has_more / with_has_more: required bool = "has_more";
        /// Cursor for the next page, absent on the last page.
        next_cursor / with_next_cursor: optional String = "next_cursor";
    }
}

const DATA: &str = "data";
const PAGINATION_METADATA: &str = "pagination_metadata";

/// One page of a list response.
///
/// Fetching further pages belongs to the HTTP layer; this type only reads
/// the envelope.
pub struct Page<T> {
    document: RawDocument,
    _items: PhantomData<fn() -> T>,
}

impl<T> Page<T> {
    /// Create an empty page for building a fixture or mock response.
    #[must_use]
    pub fn new() -> Self {
        Self::from_document(RawDocument::new())
    }

    fn from_document(document: RawDocument) -> Self {
        Self {
            document,
            _items: PhantomData,
        }
    }

    /// Decode from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MalformedDocument`] if `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self> {
        RawDocument::from_value(value).map(Self::from_document)
    }

    /// Decode from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MalformedDocument`] if the text is not a JSON
    /// object.
    pub fn parse(json: &str) -> Result<Self> {
        RawDocument::parse(json).map(Self::from_document)
    }

    /// Borrow the backing document.
    #[must_use]
    pub fn document(&self) -> &RawDocument {
        &self.document
    }

    /// Encode to a JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        self.document.to_value()
    }

    /// The pagination block.
    ///
    /// # Errors
    ///
    /// Returns an error if `pagination_metadata` is missing or not an object.
    pub fn pagination_metadata(&self) -> Result<PaginationMetadata> {
        self.document.required(PAGINATION_METADATA)
    }

    /// Set the pagination block.
    ///
    /// # Errors
    ///
    /// Returns an error if the block cannot be encoded.
    pub fn with_pagination_metadata(self, metadata: PaginationMetadata) -> Result<Self> {
        self.document
            .with(PAGINATION_METADATA, &metadata)
            .map(Self::from_document)
    }

    /// Whether more results follow this page.
    ///
    /// # Errors
    ///
    /// Returns an error if the pagination block or its `has_more` flag is
    /// unreadable.
    pub fn has_more(&self) -> Result<bool> {
        self.pagination_metadata()?
            .has_more()
            .map_err(|e| e.within(PAGINATION_METADATA))
    }

    /// Cursor to request the next page with.
    ///
    /// # Errors
    ///
    /// Returns an error if the pagination block is unreadable.
    pub fn next_cursor(&self) -> Result<Option<String>> {
        self.pagination_metadata()?
            .next_cursor()
            .map_err(|e| e.within(PAGINATION_METADATA))
    }
}

impl<T: FieldValue> Page<T> {
    /// The items on this page.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is missing or an item has the wrong shape.
    pub fn data(&self) -> Result<Vec<T>> {
        self.document.required(DATA)
    }

    /// Set the items on this page.
    ///
    /// # Errors
    ///
    /// Returns an error if an item has no wire representation.
    pub fn with_data(self, data: &[T]) -> Result<Self>
    where
        T: Clone,
    {
        self.document
            .with(DATA, &data.to_vec())
            .map(Self::from_document)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Page<T> {
    fn clone(&self) -> Self {
        Self::from_document(self.document.clone())
    }
}

impl<T> PartialEq for Page<T> {
    fn eq(&self, other: &Self) -> bool {
        self.document == other.document
    }
}

impl<T> fmt::Debug for Page<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Page").field(&self.document).finish()
    }
}

impl<T> FieldValue for Page<T> {
    const KIND: &'static str = "object";

    fn decode(value: &Value) -> Result<Self> {
        RawDocument::decode(value).map(Self::from_document)
    }

    fn encode(&self) -> Result<Value> {
        Ok(self.to_value())
    }
}

impl<T: FieldValue + Validate> Validate for Page<T> {
    fn validate(&self) -> Result<()> {
        Required::<Vec<T>>::new(DATA).check(&self.document)?;
        Required::<PaginationMetadata>::new(PAGINATION_METADATA).check(&self.document)
    }
}

impl<T> Serialize for Page<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.document.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Page<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        RawDocument::deserialize(deserializer).map(Self::from_document)
    }
}

impl<T> From<Page<T>> for RawDocument {
    fn from(page: Page<T>) -> Self {
        page.document
    }
}

impl<T> TryFrom<Value> for Page<T> {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_reads_envelope() {
        let page: Page<CustomerMinified> = Page::from_value(json!({
            "data": [{ "id": "cus_1" }, { "id": "cus_2", "external_customer_id": "acme" }],
            "pagination_metadata": { "has_more": true, "next_cursor": "c2" }
        }))
        .unwrap();

        let data = page.data().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[1].external_customer_id().unwrap().as_deref(), Some("acme"));
        assert!(page.has_more().unwrap());
        assert_eq!(page.next_cursor().unwrap().as_deref(), Some("c2"));
        assert!(page.validate().is_ok());
    }

    #[test]
    fn page_validation_names_item_path() {
        let page: Page<CustomerMinified> = Page::from_value(json!({
            "data": [{ "id": "cus_1" }, { "external_customer_id": "acme" }],
            "pagination_metadata": { "has_more": false, "next_cursor": null }
        }))
        .unwrap();

        assert_eq!(
            page.validate(),
            Err(ModelError::MissingField {
                field: "data[1].id".into()
            })
        );
        assert_eq!(page.next_cursor().unwrap(), None);
    }

    #[test]
    fn missing_metadata_is_reported_with_path() {
        let page: Page<CustomerMinified> = Page::from_value(json!({ "data": [] })).unwrap();
        assert_eq!(
            page.has_more(),
            Err(ModelError::MissingField {
                field: "pagination_metadata".into()
            })
        );
    }

    #[test]
    fn page_builds_fixtures() {
        let customer = CustomerMinified::new().with_id(CustomerId::new("cus_1")).unwrap();
        let metadata = PaginationMetadata::new()
            .with_has_more(false)
            .and_then(|m| m.with_next_cursor(None))
            .unwrap();
        let page = Page::new()
            .with_data(&[customer])
            .and_then(|p| p.with_pagination_metadata(metadata))
            .unwrap();

        assert_eq!(
            page.to_value(),
            json!({
                "data": [{ "id": "cus_1" }],
                "pagination_metadata": { "has_more": false, "next_cursor": null }
            })
        );
    }
}
