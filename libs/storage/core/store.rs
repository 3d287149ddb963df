use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use super::adapter::PersistenceAdapter;

pub type SubscriptionId = u64;

/// Collection records only need to expose their id; everything else about
/// their shape is opaque to the store.
pub trait Record: Clone + Send + Sync {
    fn id(&self) -> &str;
}

type Subscriber<T> = Box<dyn Fn(&[T]) + Send + Sync>;

/// An in-memory collection kept in sync with one key of a persistence
/// adapter.
///
/// The store loads its initial value from the adapter exactly once, at
/// construction; an absent key or text that no longer decodes as `Vec<T>`
/// both yield the empty collection (stored data is never migrated here, see
/// DESIGN.md). From then on every mutation re-encodes the whole collection
/// and hands it to the adapter before subscribers are notified, so storage
/// is never more than one mutation behind memory.
pub struct CollectionStore<T> {
    key: String,
    adapter: PersistenceAdapter,
    value: Mutex<Vec<T>>,
    subscriber_ids_counter: AtomicU64,
    // BTreeMap so notification order follows subscription order; the
    // persist observer is registered first and therefore always runs
    // before any external subscriber.
    subscribers: Mutex<BTreeMap<SubscriptionId, Subscriber<T>>>,
}

impl<T> CollectionStore<T>
where
    T: Record + Serialize + DeserializeOwned + 'static,
{
    pub fn load(adapter: PersistenceAdapter, key: impl Into<String>) -> Self {
        let key = key.into();

        let initial: Vec<T> = match adapter.read(&key) {
            None => Vec::new(),
            Some(text) => match serde_json::from_str(&text) {
                Ok(records) => records,
                Err(error) => {
                    tracing::warn!(
                        "stored value under '{key}' doesn't decode, starting empty: {error}"
                    );
                    Vec::new()
                }
            },
        };

        let store = Self {
            key,
            adapter,
            value: Mutex::new(initial),
            subscriber_ids_counter: AtomicU64::default(),
            subscribers: Mutex::new(BTreeMap::new()),
        };
        store.register_persist_observer();
        store
    }

    // Registered without an immediate call so that loading corrupt text
    // leaves the stored bytes untouched until the first real mutation.
    fn register_persist_observer(&self) {
        let adapter = self.adapter.clone();
        let key = self.key.clone();

        let id = self.generate_subscriber_id();
        self.lock_subscribers().insert(
            id,
            Box::new(move |records: &[T]| {
                let text = serde_json::to_string(records)
                    .expect("in-memory collection must serialize to JSON");
                adapter.write(&key, &text);
            }),
        );
    }

    /// Snapshot of the current collection value. Reads never touch the
    /// adapter; only the initial load does.
    pub fn get(&self) -> Vec<T> {
        self.lock_value().clone()
    }

    /// Replace the whole collection. The new value is persisted and every
    /// subscriber is notified before this returns.
    pub fn set(&self, records: Vec<T>) {
        {
            let mut value = self.lock_value();
            *value = records;
        }
        self.notify();
    }

    /// Read-modify-write convenience on top of [`Self::set`].
    pub fn update(&self, mutation: impl FnOnce(Vec<T>) -> Vec<T>) {
        let current = self.get();
        self.set(mutation(current));
    }

    /// Append a record, preserving insertion order.
    pub fn push(&self, record: T) {
        self.update(|mut records| {
            records.push(record);
            records
        });
    }

    /// Replace the record whose id matches `record.id()`, keeping its
    /// position. Returns false (and stays silent) when no record matches.
    pub fn update_by_id(&self, record: T) -> bool {
        let mut records = self.get();
        let Some(slot) = records.iter_mut().find(|r| r.id() == record.id()) else {
            return false;
        };

        *slot = record;
        self.set(records);
        true
    }

    /// Remove the record with the given id. Returns false (and stays
    /// silent) when no record matches.
    pub fn remove_by_id(&self, id: &str) -> bool {
        let mut records = self.get();
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return false;
        }

        self.set(records);
        true
    }

    /// Register a subscriber. It is invoked once immediately with the
    /// current value, then again with the full new value on every change.
    pub fn subscribe(&self, subscriber: impl Fn(&[T]) + Send + Sync + 'static) -> SubscriptionId {
        let snapshot = self.get();
        subscriber(&snapshot);

        let id = self.generate_subscriber_id();
        self.lock_subscribers().insert(id, Box::new(subscriber));
        id
    }

    pub fn unsubscribe(&self, subscription_id: SubscriptionId) {
        self.lock_subscribers().remove(&subscription_id);
    }

    fn notify(&self) {
        let snapshot = self.get();
        let subscribers = self.lock_subscribers();
        for subscriber in subscribers.values() {
            subscriber(&snapshot);
        }
    }

    fn generate_subscriber_id(&self) -> SubscriptionId {
        self.subscriber_ids_counter.fetch_add(1, Ordering::SeqCst)
    }

    fn lock_value(&self) -> std::sync::MutexGuard<'_, Vec<T>> {
        self.value.lock().expect("collection store value lock poisoned")
    }

    fn lock_subscribers(
        &self,
    ) -> std::sync::MutexGuard<'_, BTreeMap<SubscriptionId, Subscriber<T>>> {
        self.subscribers
            .lock()
            .expect("collection store subscriber lock poisoned")
    }
}
