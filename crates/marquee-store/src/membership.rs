use crate::store::Store;
use marquee_models::{Collection, MovieId};
use std::collections::BTreeSet;

/// Everywhere a movie currently appears: fixed collections by kind,
/// custom lists by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Membership {
    pub collections: BTreeSet<Collection>,
    pub custom_list_ids: BTreeSet<String>,
}

impl Membership {
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty() && self.custom_list_ids.is_empty()
    }
}

/// Scan all four fixed collections and every custom list for `movie_id`.
/// Reads live store state on every call.
pub fn membership_of(store: &Store, movie_id: MovieId) -> Membership {
    let collections = store.collections();
    let mut membership = Membership::default();

    for collection in Collection::ALL {
        if collections.load(collection).contains(&movie_id) {
            membership.collections.insert(collection);
        }
    }
    for list in store.lists().load_all() {
        if list.contains(movie_id) {
            membership.custom_list_ids.insert(list.id);
        }
    }

    membership
}
