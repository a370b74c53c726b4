use crate::error::StoreError;
use crate::store::Store;
use marquee_models::{Collection, MovieId};
use std::collections::BTreeSet;

/// Reads and writes the four fixed collections.
///
/// Every operation goes straight through to the backend, so two handles
/// over the same backend always agree once the write lands. Collections
/// are sets: adding a movie twice stores it once.
pub struct CollectionStore {
    store: Store,
}

impl CollectionStore {
    pub(crate) fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn load(&self, collection: Collection) -> BTreeSet<MovieId> {
        self.store.read_value(collection.storage_key())
    }

    pub fn save(&self, collection: Collection, ids: &BTreeSet<MovieId>) -> Result<(), StoreError> {
        self.store.write_value(collection.storage_key(), ids)
    }

    /// Flip membership of `movie_id` in `collection`. Returns whether the
    /// movie is a member after the flip.
    pub fn toggle(&self, collection: Collection, movie_id: MovieId) -> Result<bool, StoreError> {
        let mut ids = self.load(collection);
        let now_member = if ids.remove(&movie_id) {
            false
        } else {
            ids.insert(movie_id);
            true
        };
        self.save(collection, &ids)?;
        Ok(now_member)
    }

    pub fn add(&self, collection: Collection, movie_id: MovieId) -> Result<(), StoreError> {
        let mut ids = self.load(collection);
        ids.insert(movie_id);
        self.save(collection, &ids)
    }

    pub fn remove(&self, collection: Collection, movie_id: MovieId) -> Result<(), StoreError> {
        let mut ids = self.load(collection);
        ids.remove(&movie_id);
        self.save(collection, &ids)
    }

    pub fn contains(&self, collection: Collection, movie_id: MovieId) -> bool {
        self.load(collection).contains(&movie_id)
    }
}
