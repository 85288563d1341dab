//! In-memory content store adapter.
//!
//! Stand-in for the hosted document collection, used by tests and the dev
//! harness. It keeps one document per id and, like the hosted store's live
//! read, publishes the entire re-sorted collection to every observer after
//! each successful mutation.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    ContentSnapshot, ContentStore, ContentStoreError, SubscriberRegistry, Subscription,
};
use crate::domain::{ContentFields, ContentItem, ContentItemId};

/// Map-backed [`ContentStore`] with live full-snapshot notification.
pub struct InMemoryContentStore {
    collection: String,
    documents: Mutex<HashMap<ContentItemId, ContentFields>>,
    observers: SubscriberRegistry<ContentSnapshot>,
}

impl InMemoryContentStore {
    /// Create an empty collection with the given logical name.
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            documents: Mutex::new(HashMap::new()),
            observers: SubscriberRegistry::new(),
        }
    }

    /// Logical collection name, for diagnostics.
    pub fn collection(&self) -> &str {
        self.collection.as_str()
    }

    /// Number of currently attached live reads.
    pub fn observer_count(&self) -> usize {
        self.observers.observer_count()
    }

    fn lock(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<ContentItemId, ContentFields>>, ContentStoreError> {
        self.documents
            .lock()
            .map_err(|_| ContentStoreError::connection("store state poisoned"))
    }

    fn snapshot_of(documents: &HashMap<ContentItemId, ContentFields>) -> ContentSnapshot {
        let mut snapshot: ContentSnapshot = documents
            .iter()
            .map(|(id, fields)| ContentItem::new(id.clone(), fields.clone()))
            .collect();
        snapshot.sort_by(ContentItem::feed_order);
        snapshot
    }

    fn publish_from(&self, documents: &HashMap<ContentItemId, ContentFields>) {
        self.observers.publish(&Self::snapshot_of(documents));
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    fn subscribe(&self) -> Subscription<ContentSnapshot> {
        // Register under the documents lock so a concurrent mutation can
        // never fall between the initial snapshot and the change feed.
        match self.documents.lock() {
            Ok(documents) => self.observers.subscribe_with(Self::snapshot_of(&documents)),
            Err(_) => self.observers.subscribe_with(ContentSnapshot::new()),
        }
    }

    async fn insert(&self, fields: &ContentFields) -> Result<ContentItemId, ContentStoreError> {
        let id = ContentItemId::random();
        let mut documents = self.lock()?;
        documents.insert(id.clone(), fields.clone());
        self.publish_from(&documents);
        Ok(id)
    }

    async fn replace(
        &self,
        id: &ContentItemId,
        fields: &ContentFields,
    ) -> Result<(), ContentStoreError> {
        let mut documents = self.lock()?;
        let Some(slot) = documents.get_mut(id) else {
            return Err(ContentStoreError::not_found(id.as_ref()));
        };
        *slot = fields.clone();
        self.publish_from(&documents);
        Ok(())
    }

    async fn delete(&self, id: &ContentItemId) -> Result<(), ContentStoreError> {
        let mut documents = self.lock()?;
        if documents.remove(id).is_none() {
            return Err(ContentStoreError::not_found(id.as_ref()));
        }
        self.publish_from(&documents);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ContentDraft;
    use rstest::rstest;

    fn fields(title: &str, date: Option<&str>) -> ContentFields {
        let draft = ContentDraft {
            title: title.to_owned(),
            date: date.map(|d| d.parse().expect("test date parses")),
            ..ContentDraft::default()
        };
        ContentFields::try_from_draft(&draft).expect("test draft is valid")
    }

    #[tokio::test]
    async fn subscribe_delivers_the_current_snapshot_first() {
        let store = InMemoryContentStore::new("contentItems");
        store
            .insert(&fields("Existing", Some("2024-01-01")))
            .await
            .expect("insert succeeds");

        let mut live = store.subscribe();
        let snapshot = live.try_next().expect("initial snapshot is queued");
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].fields().title(), "Existing");
    }

    #[tokio::test]
    async fn every_mutation_publishes_a_full_ordered_snapshot() {
        let store = InMemoryContentStore::new("contentItems");
        let mut live = store.subscribe();
        assert_eq!(live.try_next().expect("initial snapshot").len(), 0);

        let older = store
            .insert(&fields("Older", Some("2024-01-01")))
            .await
            .expect("insert succeeds");
        let newer = store
            .insert(&fields("Newer", Some("2024-02-01")))
            .await
            .expect("insert succeeds");

        assert_eq!(live.try_next().expect("after first insert").len(), 1);
        let snapshot = live.try_next().expect("after second insert");
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id(), &newer);
        assert_eq!(snapshot[1].id(), &older);
    }

    #[tokio::test]
    async fn replace_keeps_the_identifier_and_republishes() {
        let store = InMemoryContentStore::new("contentItems");
        let id = store
            .insert(&fields("Before", Some("2024-01-01")))
            .await
            .expect("insert succeeds");

        let mut live = store.subscribe();
        drop(live.try_next());
        store
            .replace(&id, &fields("After", Some("2024-01-01")))
            .await
            .expect("replace succeeds");

        let snapshot = live.try_next().expect("after replace");
        assert_eq!(snapshot[0].id(), &id);
        assert_eq!(snapshot[0].fields().title(), "After");
    }

    #[tokio::test]
    async fn replace_unknown_id_is_not_found_and_publishes_nothing() {
        let store = InMemoryContentStore::new("contentItems");
        let mut live = store.subscribe();
        drop(live.try_next());

        let ghost = ContentItemId::random();
        let err = store
            .replace(&ghost, &fields("Ghost", None))
            .await
            .expect_err("unknown id must fail");
        assert_eq!(err, ContentStoreError::not_found(ghost.as_ref()));
        assert!(live.try_next().is_none());
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let store = InMemoryContentStore::new("contentItems");
        let ghost = ContentItemId::random();
        let err = store.delete(&ghost).await.expect_err("unknown id must fail");
        assert_eq!(err, ContentStoreError::not_found(ghost.as_ref()));
    }

    #[tokio::test]
    async fn date_ties_are_broken_by_ascending_id() {
        let store = InMemoryContentStore::new("contentItems");
        let first = store
            .insert(&fields("One", Some("2024-01-01")))
            .await
            .expect("insert succeeds");
        let second = store
            .insert(&fields("Two", Some("2024-01-01")))
            .await
            .expect("insert succeeds");

        let mut live = store.subscribe();
        let snapshot = live.try_next().expect("initial snapshot");
        let mut expected = [first.as_ref(), second.as_ref()];
        expected.sort_unstable();
        let actual: Vec<&str> = snapshot.iter().map(|item| item.id().as_ref()).collect();
        assert_eq!(actual, expected);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn observers_attaching_mid_write_converge_on_the_final_collection() {
        use std::sync::Arc;
        use std::time::Duration;

        const WRITES: usize = 32;
        let store = Arc::new(InMemoryContentStore::new("contentItems"));

        let writer = {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                for i in 0..WRITES {
                    store
                        .insert(&fields(&format!("item {i}"), None))
                        .await
                        .expect("insert succeeds");
                }
            })
        };
        let observers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    let mut live = store.subscribe();
                    let mut latest = live.next().await.expect("initial snapshot");
                    while latest.len() < WRITES {
                        latest = live.next().await.expect("store outlives the observer");
                    }
                    latest.len()
                })
            })
            .collect();

        writer.await.expect("writer task completes");
        for observer in observers {
            let seen = tokio::time::timeout(Duration::from_secs(5), observer)
                .await
                .expect("every observer sees the final collection")
                .expect("observer task completes");
            assert_eq!(seen, WRITES);
        }
    }

    #[tokio::test]
    async fn cancelled_observers_receive_nothing_further() {
        let store = InMemoryContentStore::new("contentItems");
        let mut live = store.subscribe();
        drop(live.try_next());
        live.cancel();

        store
            .insert(&fields("Afterwards", None))
            .await
            .expect("insert succeeds");
        assert!(live.try_next().is_none());
        assert_eq!(store.observer_count(), 0);
    }
}
