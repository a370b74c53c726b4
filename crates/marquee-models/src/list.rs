use serde::{Deserialize, Serialize};

use crate::movie::MovieId;

/// A user-created, user-named list of movies.
///
/// `movie_ids` keeps insertion order and is not deduplicated; repeated adds
/// through different entry points may store the same id twice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomList {
    pub id: String,
    pub name: String,
    pub movie_ids: Vec<MovieId>,
    /// Milliseconds since the Unix epoch, set once at creation.
    pub created_at: i64,
}

impl CustomList {
    pub fn contains(&self, movie_id: MovieId) -> bool {
        self.movie_ids.contains(&movie_id)
    }
}
