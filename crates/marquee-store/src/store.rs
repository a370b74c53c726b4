use crate::backend::StorageBackend;
use crate::collections::CollectionStore;
use crate::error::StoreError;
use crate::lists::{CustomListStore, ListManager, CUSTOM_LISTS_KEY};
use crate::notify::{ChangeNotifier, StoreChange, SubscriptionId};
use crate::theme::{ThemeStore, THEME_KEY};
use marquee_models::Collection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Handle onto one persisted profile plus its change feed.
///
/// Clones share the same backend and the same feed, like views within a
/// single tab. A second `Store` constructed over the same backend acts as
/// an independent tab: it sees writes only when it next reads, and its
/// subscribers hear nothing about the other handle's writes.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
    notifier: Arc<ChangeNotifier>,
}

impl Store {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            notifier: Arc::new(ChangeNotifier::new()),
        }
    }

    pub fn collections(&self) -> CollectionStore {
        CollectionStore::new(self.clone())
    }

    pub fn lists(&self) -> CustomListStore {
        CustomListStore::new(self.clone())
    }

    /// A list manager snapshotting the custom lists as of right now.
    pub fn list_manager(&self) -> ListManager {
        ListManager::new(self.lists())
    }

    pub fn theme(&self) -> ThemeStore {
        ThemeStore::new(self.clone())
    }

    /// Register a listener for writes made through this handle (or its
    /// clones). Returns an id for [`Store::unsubscribe`].
    pub fn subscribe(&self, listener: impl Fn(&StoreChange) + Send + Sync + 'static) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.notifier.unsubscribe(id)
    }

    /// Remove every key this store manages: the four fixed collections,
    /// the custom lists, and the theme selection.
    pub fn clear_all(&self) -> Result<(), StoreError> {
        self.clear_collections()?;
        self.clear_lists()?;
        self.clear_theme()?;
        Ok(())
    }

    pub fn clear_collections(&self) -> Result<(), StoreError> {
        for collection in Collection::ALL {
            self.remove_key(collection.storage_key())?;
        }
        Ok(())
    }

    pub fn clear_lists(&self) -> Result<(), StoreError> {
        self.remove_key(CUSTOM_LISTS_KEY)
    }

    pub fn clear_theme(&self) -> Result<(), StoreError> {
        self.remove_key(THEME_KEY)
    }

    /// Deserialize the value under `key`, or `None` when the key is absent,
    /// unreadable, or holds something that no longer parses. Damage is
    /// logged and then treated exactly like an empty store.
    pub(crate) fn read_optional<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read {}: {:#}. Treating as empty.", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Discarding corrupt value under {}: {}", key, e);
                None
            }
        }
    }

    pub(crate) fn read_value<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.read_optional(key).unwrap_or_default()
    }

    pub(crate) fn write_value<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value).map_err(|e| StoreError::Backend(e.into()))?;
        self.backend.set(key, &json)?;
        debug!("Updated {}", key);
        self.notifier.emit(&StoreChange {
            key: key.to_string(),
        });
        Ok(())
    }

    pub(crate) fn remove_key(&self, key: &str) -> Result<(), StoreError> {
        self.backend.remove(key)?;
        self.notifier.emit(&StoreChange {
            key: key.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;

    fn memory_store() -> (Store, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        (Store::new(Arc::clone(&backend) as Arc<dyn StorageBackend>), backend)
    }

    #[test]
    fn test_read_value_defaults_when_absent() {
        let (store, _backend) = memory_store();
        let ids: Vec<u32> = store.read_value("favorites");
        assert!(ids.is_empty());
    }

    #[test]
    fn test_read_value_defaults_when_corrupt() {
        let (store, backend) = memory_store();
        backend.set("favorites", "{not json").unwrap();

        let ids: Vec<u32> = store.read_value("favorites");
        assert!(ids.is_empty());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let (store, _backend) = memory_store();
        store.write_value("favorites", &vec![3u32, 1, 7]).unwrap();

        let ids: Vec<u32> = store.read_value("favorites");
        assert_eq!(ids, vec![3, 1, 7]);
    }

    #[test]
    fn test_corrupt_value_survives_until_next_write() {
        let (store, backend) = memory_store();
        backend.set("watchLater", "]]]").unwrap();

        let ids: Vec<u32> = store.read_value("watchLater");
        assert!(ids.is_empty());
        // Reading damage does not erase it; only a write replaces it
        assert_eq!(backend.get("watchLater").unwrap().as_deref(), Some("]]]"));

        store.write_value("watchLater", &vec![5u32]).unwrap();
        let ids: Vec<u32> = store.read_value("watchLater");
        assert_eq!(ids, vec![5]);
    }

    #[test]
    fn test_clear_all_removes_every_key() {
        let (store, backend) = memory_store();
        store.collections().add(Collection::Watched, 1).unwrap();
        store.write_value(CUSTOM_LISTS_KEY, &Vec::<u32>::new()).unwrap();
        store.theme().set("SunsetPop").unwrap();

        store.clear_all().unwrap();

        assert_eq!(backend.get("moviesWatched").unwrap(), None);
        assert_eq!(backend.get(CUSTOM_LISTS_KEY).unwrap(), None);
        assert_eq!(backend.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn test_clones_share_one_change_feed() {
        use std::sync::Mutex;

        let (store, _backend) = memory_store();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        store.subscribe(move |change| {
            sink.lock().unwrap().push(change.key.clone());
        });

        let clone = store.clone();
        clone.write_value("favorites", &vec![2u32]).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["favorites"]);
    }

    #[test]
    fn test_independent_stores_do_not_cross_notify() {
        use std::sync::Mutex;

        let backend = Arc::new(MemoryBackend::new());
        let first = Store::new(Arc::clone(&backend) as Arc<dyn StorageBackend>);
        let second = Store::new(backend as Arc<dyn StorageBackend>);

        let seen = Arc::new(Mutex::new(0u32));
        let sink = Arc::clone(&seen);
        first.subscribe(move |_| {
            *sink.lock().unwrap() += 1;
        });

        second.write_value("classics", &vec![9u32]).unwrap();

        assert_eq!(*seen.lock().unwrap(), 0);
    }
}
