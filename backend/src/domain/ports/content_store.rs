//! Driven port for the hosted content document store.
//!
//! The store holds one document per [`ContentItem`] in a collection ordered
//! server-side by date descending. Live reads deliver the *entire* current
//! collection on every change (insert, update, delete, or batch), never a
//! diff, so consumers hold no merge logic beyond "last full snapshot wins".

use async_trait::async_trait;

use crate::domain::{ContentFields, ContentItem, ContentItemId};

use super::define_port_error;
use super::subscription::Subscription;

define_port_error! {
    /// Errors raised by content store adapters.
    pub enum ContentStoreError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "content store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "content store query failed: {message}",
        /// No document exists under the given identifier.
        NotFound { id: String } =>
            "content item not found: {id}",
    }
}

/// The complete current ordered collection, as delivered by a live read.
pub type ContentSnapshot = Vec<ContentItem>;

/// Port for content item storage and live notification.
///
/// # Ordering
///
/// Snapshots arrive sorted by [`ContentItem::feed_order`]: date descending,
/// undated items last, ties broken by ascending identifier. Successive
/// snapshots are delivered in the order the store emitted the underlying
/// changes; two rapid remote changes produce two sequential snapshots, each
/// fully superseding the last.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Establish a live read. The current snapshot is queued immediately,
    /// then every change delivers a fresh one. Cancel the returned handle to
    /// detach; cancelling after the session ends is a harmless no-op.
    fn subscribe(&self) -> Subscription<ContentSnapshot>;

    /// Persist a new document and return the store-assigned identifier.
    /// On failure the collection is left unchanged.
    async fn insert(&self, fields: &ContentFields) -> Result<ContentItemId, ContentStoreError>;

    /// Replace all mutable fields of the document with the given identifier.
    /// Fails with [`ContentStoreError::NotFound`] when it no longer exists.
    async fn replace(
        &self,
        id: &ContentItemId,
        fields: &ContentFields,
    ) -> Result<(), ContentStoreError>;

    /// Remove the document with the given identifier. Deleting a
    /// nonexistent identifier surfaces the store's own not-found behaviour.
    async fn delete(&self, id: &ContentItemId) -> Result<(), ContentStoreError>;
}
