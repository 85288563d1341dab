//! Content catalogue service: the in-process face of the hosted collection.
//!
//! Wraps the [`ContentStore`] port with the write operations the admin
//! screen needs and the live read the public page needs. The catalogue adds
//! no caching or merge logic of its own: every snapshot delivered by the
//! store fully replaces whatever an observer held before, and write
//! failures surface as the store's own error, untranslated, so the caller
//! decides what (if anything) to tell the operator.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{ContentSnapshot, ContentStore, ContentStoreError, Subscription};
use crate::domain::{ContentFields, ContentItemId};

/// Live, ordered view of the content collection plus its write operations.
#[derive(Clone)]
pub struct ContentCatalogue<S> {
    store: Arc<S>,
}

impl<S> ContentCatalogue<S> {
    /// Create a catalogue over the given store adapter.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S: ContentStore> ContentCatalogue<S> {
    /// Establish a live read. The handle immediately yields the current
    /// snapshot, then the complete collection after every change.
    pub fn subscribe(&self) -> Subscription<ContentSnapshot> {
        self.store.subscribe()
    }

    /// Persist a new item and return the store-assigned identifier.
    pub async fn create(&self, fields: &ContentFields) -> Result<ContentItemId, ContentStoreError> {
        let id = self.store.insert(fields).await?;
        debug!(id = %id, title = fields.title(), "content item created");
        Ok(id)
    }

    /// Replace all mutable fields of an existing item.
    pub async fn update(
        &self,
        id: &ContentItemId,
        fields: &ContentFields,
    ) -> Result<(), ContentStoreError> {
        self.store.replace(id, fields).await?;
        debug!(id = %id, title = fields.title(), "content item updated");
        Ok(())
    }

    /// Remove an item. Removing an identifier that no longer exists yields
    /// the store's own not-found error.
    pub async fn remove(&self, id: &ContentItemId) -> Result<(), ContentStoreError> {
        self.store.delete(id).await?;
        debug!(id = %id, "content item deleted");
        Ok(())
    }
}
