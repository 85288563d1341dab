//! Cancellable full-snapshot subscriptions.
//!
//! Both external collaborators push change notifications: the identity
//! provider emits assertion events, the content store emits whole-collection
//! snapshots. Deliveries are messages on an in-process queue rather than
//! synchronous callbacks from foreign threads, so each observer sees events
//! in exactly the order they were published. The [`Subscription`] handle is
//! the only resource whose lifetime the caller manages: cancel it when the
//! consuming view is torn down and no further deliveries arrive.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use tokio::sync::mpsc;

type Senders<T> = Arc<Mutex<Vec<(u64, mpsc::UnboundedSender<T>)>>>;

/// Handle to a live stream of published values.
///
/// Dropping the handle also detaches the observer; `cancel` merely makes the
/// detachment explicit and immediate. Cancelling twice, or after the
/// publisher has gone away, is a no-op.
#[derive(Debug)]
pub struct Subscription<T> {
    id: u64,
    senders: Weak<Mutex<Vec<(u64, mpsc::UnboundedSender<T>)>>>,
    receiver: mpsc::UnboundedReceiver<T>,
}

impl<T> Subscription<T> {
    /// Wait for the next delivery. Returns `None` once the subscription is
    /// cancelled or the publisher is gone and the queue has drained.
    pub async fn next(&mut self) -> Option<T> {
        self.receiver.recv().await
    }

    /// Take an already-queued delivery without waiting.
    pub fn try_next(&mut self) -> Option<T> {
        self.receiver.try_recv().ok()
    }

    /// Detach this observer. Queued but unread deliveries are discarded and
    /// nothing further arrives.
    pub fn cancel(&mut self) {
        if let Some(senders) = self.senders.upgrade() {
            let Ok(mut guard) = senders.lock() else {
                return;
            };
            guard.retain(|(id, _)| *id != self.id);
        }
        self.receiver.close();
        while self.receiver.try_recv().is_ok() {}
    }
}

/// Publisher half: a registry of live observers.
///
/// Publishing clones the value once per observer and silently prunes
/// observers whose receiving half has gone away.
#[derive(Debug)]
pub struct SubscriberRegistry<T> {
    senders: Senders<T>,
    next_id: AtomicU64,
}

impl<T> Default for SubscriberRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SubscriberRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            senders: Arc::new(Mutex::new(Vec::new())),
            next_id: AtomicU64::new(0),
        }
    }

    /// Register a new observer.
    pub fn subscribe(&self) -> Subscription<T> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut guard) = self.senders.lock() {
            guard.push((id, sender));
        }
        Subscription {
            id,
            senders: Arc::downgrade(&self.senders),
            receiver,
        }
    }

    /// Number of currently attached observers.
    pub fn observer_count(&self) -> usize {
        self.senders.lock().map(|guard| guard.len()).unwrap_or(0)
    }
}

impl<T: Clone> SubscriberRegistry<T> {
    /// Register a new observer and immediately queue `initial` for it, the
    /// way a live read delivers the current snapshot before any change.
    pub fn subscribe_with(&self, initial: T) -> Subscription<T> {
        let subscription = self.subscribe();
        if let Ok(guard) = self.senders.lock() {
            if let Some((_, sender)) = guard.iter().find(|(id, _)| *id == subscription.id) {
                // Receiver is held by the subscription we just built, so the
                // send can only fail if it was already cancelled.
                drop(sender.send(initial));
            }
        }
        subscription
    }

    /// Deliver `value` to every attached observer, in registration order.
    pub fn publish(&self, value: &T) {
        let Ok(mut guard) = self.senders.lock() else {
            return;
        };
        guard.retain(|(_, sender)| sender.send(value.clone()).is_ok());
    }
}
