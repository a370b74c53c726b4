use crate::error::StoreError;
use crate::store::Store;
use chrono::Utc;
use marquee_models::{CustomList, MovieId};
use rand::Rng;
use tracing::info;

pub const CUSTOM_LISTS_KEY: &str = "customLists";

/// Raw access to the persisted custom list array.
pub struct CustomListStore {
    store: Store,
}

impl CustomListStore {
    pub(crate) fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn load_all(&self) -> Vec<CustomList> {
        self.store.read_value(CUSTOM_LISTS_KEY)
    }

    pub fn save_all(&self, lists: &[CustomList]) -> Result<(), StoreError> {
        self.store.write_value(CUSTOM_LISTS_KEY, lists)
    }
}

/// Lifecycle operations over a snapshot of the custom lists.
///
/// The snapshot is taken once, at construction. Every mutation rewrites the
/// full array from that snapshot, so a manager that has not seen another
/// handle's writes will overwrite them; the last writer wins. Call
/// [`ListManager::reload`] to refresh the snapshot first.
pub struct ListManager {
    store: CustomListStore,
    lists: Vec<CustomList>,
}

impl ListManager {
    pub fn new(store: CustomListStore) -> Self {
        let lists = store.load_all();
        Self { store, lists }
    }

    /// Replace the snapshot with whatever is persisted right now.
    pub fn reload(&mut self) {
        self.lists = self.store.load_all();
    }

    pub fn lists(&self) -> &[CustomList] {
        &self.lists
    }

    pub fn get(&self, list_id: &str) -> Option<&CustomList> {
        self.lists.iter().find(|l| l.id == list_id)
    }

    /// Create a list, optionally seeded with one movie, and return the new
    /// record. The name is trimmed before validation and must be non-empty
    /// and unique among current lists (compared case-insensitively).
    pub fn create(&mut self, name: &str, initial_movie: Option<MovieId>) -> Result<CustomList, StoreError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let lowered = trimmed.to_lowercase();
        if self.lists.iter().any(|l| l.name.to_lowercase() == lowered) {
            return Err(StoreError::DuplicateName(trimmed.to_string()));
        }

        let list = CustomList {
            id: generate_list_id(),
            name: trimmed.to_string(),
            movie_ids: initial_movie.into_iter().collect(),
            created_at: Utc::now().timestamp_millis(),
        };

        let mut updated = self.lists.clone();
        updated.push(list.clone());
        self.store.save_all(&updated)?;
        self.lists = updated;

        info!("Created list \"{}\" ({})", list.name, list.id);
        Ok(list)
    }

    /// Rename a list. The new name is trimmed and must be non-empty;
    /// uniqueness is only enforced at creation, so renaming onto an
    /// existing name succeeds. Unknown ids are a no-op.
    pub fn rename(&mut self, list_id: &str, new_name: &str) -> Result<(), StoreError> {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return Err(StoreError::EmptyName);
        }
        self.rewrite_matching(list_id, |list| list.name = trimmed.to_string())
    }

    /// Delete a list and all of its memberships. Unknown ids are a no-op,
    /// so deleting twice is safe.
    pub fn delete(&mut self, list_id: &str) -> Result<(), StoreError> {
        if !self.lists.iter().any(|l| l.id == list_id) {
            return Ok(());
        }
        let updated: Vec<CustomList> = self
            .lists
            .iter()
            .filter(|l| l.id != list_id)
            .cloned()
            .collect();
        self.store.save_all(&updated)?;
        self.lists = updated;

        info!("Deleted list {}", list_id);
        Ok(())
    }

    /// Flip membership of `movie_id` in the list. Removing strips every
    /// occurrence of the id. Unknown list ids are a no-op.
    pub fn toggle_membership(&mut self, list_id: &str, movie_id: MovieId) -> Result<(), StoreError> {
        self.rewrite_matching(list_id, |list| {
            if list.contains(movie_id) {
                list.movie_ids.retain(|id| *id != movie_id);
            } else {
                list.movie_ids.push(movie_id);
            }
        })
    }

    /// Append `movie_id` to the list. The id array is kept verbatim, so
    /// adding the same movie twice stores it twice.
    pub fn add_movie(&mut self, list_id: &str, movie_id: MovieId) -> Result<(), StoreError> {
        self.rewrite_matching(list_id, |list| list.movie_ids.push(movie_id))
    }

    /// Remove every occurrence of `movie_id` from the list.
    pub fn remove_movie(&mut self, list_id: &str, movie_id: MovieId) -> Result<(), StoreError> {
        self.rewrite_matching(list_id, |list| list.movie_ids.retain(|id| *id != movie_id))
    }

    fn rewrite_matching<F>(&mut self, list_id: &str, apply: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut CustomList),
    {
        let index = match self.lists.iter().position(|l| l.id == list_id) {
            Some(index) => index,
            None => return Ok(()),
        };
        let mut updated = self.lists.clone();
        apply(&mut updated[index]);
        self.store.save_all(&updated)?;
        self.lists = updated;
        Ok(())
    }
}

/// Ids look like `list-1700000000000-k3j9x0q2m`: creation time in
/// milliseconds plus nine random base-36 characters to keep ids minted in
/// the same millisecond distinct.
fn generate_list_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::rng();
    let suffix: String = (0..9)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();
    format!("list-{}-{}", Utc::now().timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MemoryBackend, StorageBackend};
    use std::sync::Arc;

    fn manager() -> (ListManager, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        let store = Store::new(Arc::clone(&backend) as Arc<dyn StorageBackend>);
        (store.list_manager(), backend)
    }

    fn manager_over(backend: &Arc<MemoryBackend>) -> ListManager {
        Store::new(Arc::clone(backend) as Arc<dyn StorageBackend>).list_manager()
    }

    #[test]
    fn test_create_trims_name_and_seeds_initial_movie() {
        let (mut manager, _backend) = manager();

        let list = manager.create("  Date Night  ", Some(5)).unwrap();

        assert_eq!(list.name, "Date Night");
        assert_eq!(list.movie_ids, vec![5]);
        assert!(list.created_at > 0);
        assert_eq!(manager.lists().len(), 1);
    }

    #[test]
    fn test_create_without_initial_movie_starts_empty() {
        let (mut manager, _backend) = manager();

        let list = manager.create("Oscars", None).unwrap();

        assert!(list.movie_ids.is_empty());
    }

    #[test]
    fn test_generated_ids_have_the_expected_shape() {
        let (mut manager, _backend) = manager();

        let first = manager.create("One", None).unwrap();
        let second = manager.create("Two", None).unwrap();

        let parts: Vec<&str> = first.id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "list");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_create_rejects_whitespace_only_names() {
        let (mut manager, backend) = manager();

        let err = manager.create("   ", None).unwrap_err();

        assert!(matches!(err, StoreError::EmptyName));
        assert!(manager.lists().is_empty());
        assert_eq!(backend.get(CUSTOM_LISTS_KEY).unwrap(), None);
    }

    #[test]
    fn test_create_rejects_duplicate_names_case_insensitively() {
        let (mut manager, backend) = manager();

        manager.create("Marvel Movies", None).unwrap();
        let before = backend.get(CUSTOM_LISTS_KEY).unwrap();

        let err = manager.create("  MARVEL MOVIES ", None).unwrap_err();

        assert!(matches!(err, StoreError::DuplicateName(name) if name == "MARVEL MOVIES"));
        assert_eq!(manager.lists().len(), 1);
        assert_eq!(backend.get(CUSTOM_LISTS_KEY).unwrap(), before);
    }

    #[test]
    fn test_rename_trims_and_persists() {
        let (mut manager, backend) = manager();
        let list = manager.create("Old Name", None).unwrap();

        manager.rename(&list.id, "  New Name ").unwrap();

        assert_eq!(manager.get(&list.id).unwrap().name, "New Name");

        let reloaded = manager_over(&backend);
        assert_eq!(reloaded.lists()[0].name, "New Name");
    }

    #[test]
    fn test_rename_rejects_empty_names() {
        let (mut manager, _backend) = manager();
        let list = manager.create("Keep Me", None).unwrap();

        let err = manager.rename(&list.id, " ").unwrap_err();

        assert!(matches!(err, StoreError::EmptyName));
        assert_eq!(manager.get(&list.id).unwrap().name, "Keep Me");
    }

    #[test]
    fn test_rename_unknown_id_writes_nothing() {
        let (mut manager, backend) = manager();
        manager.create("Solo", None).unwrap();
        let before = backend.get(CUSTOM_LISTS_KEY).unwrap();

        manager.rename("list-0-missing", "Anything").unwrap();

        assert_eq!(backend.get(CUSTOM_LISTS_KEY).unwrap(), before);
    }

    #[test]
    fn test_rename_onto_an_existing_name_is_allowed() {
        let (mut manager, _backend) = manager();
        manager.create("First", None).unwrap();
        let second = manager.create("Second", None).unwrap();

        manager.rename(&second.id, "first").unwrap();

        let names: Vec<&str> = manager.lists().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["First", "first"]);
    }

    #[test]
    fn test_delete_removes_list_and_tolerates_repeats() {
        let (mut manager, _backend) = manager();
        let list = manager.create("Ephemeral", Some(2)).unwrap();

        manager.delete(&list.id).unwrap();
        assert!(manager.lists().is_empty());
        assert!(manager.get(&list.id).is_none());

        manager.delete(&list.id).unwrap();
        assert!(manager.lists().is_empty());
    }

    #[test]
    fn test_toggle_membership_adds_then_removes() {
        let (mut manager, _backend) = manager();
        let list = manager.create("Weekend", None).unwrap();

        manager.toggle_membership(&list.id, 9).unwrap();
        assert_eq!(manager.get(&list.id).unwrap().movie_ids, vec![9]);

        manager.toggle_membership(&list.id, 9).unwrap();
        assert!(manager.get(&list.id).unwrap().movie_ids.is_empty());
    }

    #[test]
    fn test_toggle_membership_on_unknown_list_is_a_no_op() {
        let (mut manager, backend) = manager();
        manager.create("Present", None).unwrap();
        let before = backend.get(CUSTOM_LISTS_KEY).unwrap();

        manager.toggle_membership("list-0-missing", 1).unwrap();

        assert_eq!(backend.get(CUSTOM_LISTS_KEY).unwrap(), before);
    }

    #[test]
    fn test_add_movie_keeps_duplicates() {
        let (mut manager, _backend) = manager();
        let list = manager.create("Rewatches", None).unwrap();

        manager.add_movie(&list.id, 4).unwrap();
        manager.add_movie(&list.id, 4).unwrap();

        assert_eq!(manager.get(&list.id).unwrap().movie_ids, vec![4, 4]);
    }

    #[test]
    fn test_remove_movie_strips_every_occurrence() {
        let (mut manager, _backend) = manager();
        let list = manager.create("Rewatches", None).unwrap();
        manager.add_movie(&list.id, 4).unwrap();
        manager.add_movie(&list.id, 7).unwrap();
        manager.add_movie(&list.id, 4).unwrap();

        manager.remove_movie(&list.id, 4).unwrap();

        assert_eq!(manager.get(&list.id).unwrap().movie_ids, vec![7]);
    }

    #[test]
    fn test_corrupt_list_data_loads_as_empty() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set(CUSTOM_LISTS_KEY, "{\"oops\": true}").unwrap();

        let manager = manager_over(&backend);

        assert!(manager.lists().is_empty());
    }

    #[test]
    fn test_reload_picks_up_external_writes() {
        let backend = Arc::new(MemoryBackend::new());
        let mut first = manager_over(&backend);
        let mut second = manager_over(&backend);

        first.create("Shared", None).unwrap();
        assert!(second.lists().is_empty());

        second.reload();
        assert_eq!(second.lists().len(), 1);
        assert_eq!(second.lists()[0].name, "Shared");
    }
}
