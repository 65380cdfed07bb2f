use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::OnceCell;

use crate::types::FlashcardSet;

type Slot = Arc<OnceCell<Arc<FlashcardSet>>>;

/// Process-lifetime map from trimmed study text to its flashcards
///
/// Keys are compared exactly: case and inner whitespace matter. Entries are
/// never evicted or replaced once written. Concurrent misses on the same
/// key share a single computation; a failed computation leaves the key
/// empty so the next caller tries again.
#[derive(Debug, Default)]
pub struct FlashcardCache {
    slots: DashMap<String, Slot>,
}

impl FlashcardCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached set for `key`, if one has been written
    pub fn lookup(&self, key: &str) -> Option<Arc<FlashcardSet>> {
        self.slots.get(key).and_then(|slot| slot.get().cloned())
    }

    /// Write `set` for `key` unless a set is already present
    ///
    /// Returns the set that is cached after the call, which is the earlier
    /// one when the key was already filled.
    pub fn store(&self, key: &str, set: Arc<FlashcardSet>) -> Arc<FlashcardSet> {
        let slot = self.slot(key);

        match slot.set(Arc::clone(&set)) {
            Ok(()) => set,
            Err(_) => slot.get().cloned().unwrap_or(set),
        }
    }

    /// Return the cached set, or run `init` once to produce it
    ///
    /// Callers racing on the same uncached key wait for the first caller's
    /// `init` instead of running their own.
    pub async fn get_or_try_insert_with<F, Fut, E>(&self, key: &str, init: F) -> Result<Arc<FlashcardSet>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<FlashcardSet, E>>,
    {
        // Clone the slot out so no map shard lock is held across the await
        let slot = self.slot(key);

        let result = slot
            .get_or_try_init(|| async move { init().await.map(Arc::new) })
            .await
            .cloned();

        if result.is_err() {
            // Keep the slot while other callers still wait on it
            self.slots
                .remove_if(key, |_, s| !s.initialized() && Arc::strong_count(s) <= 2);
        }

        result
    }

    /// Number of keys with a slot, filled or still computing
    #[cfg(test)]
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of keys with a cached set
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|entry| entry.value().initialized()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, key: &str) -> Slot {
        if let Some(slot) = self.slots.get(key) {
            return Arc::clone(slot.value());
        }

        Arc::clone(self.slots.entry(key.to_owned()).or_default().value())
    }
}
