use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four predefined collections every profile has. Unlike custom
/// lists these carry no user-assigned name and cannot be created, renamed or
/// deleted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Watched,
    Favorites,
    Classics,
    WatchLater,
}

impl Collection {
    /// All fixed collections, in presentation order.
    pub const ALL: [Collection; 4] = [
        Collection::Watched,
        Collection::Favorites,
        Collection::Classics,
        Collection::WatchLater,
    ];

    /// Storage key the collection's id set is persisted under. Stable;
    /// changing one orphans previously saved data.
    pub fn storage_key(self) -> &'static str {
        match self {
            Collection::Watched => "moviesWatched",
            Collection::Favorites => "favorites",
            Collection::Classics => "classics",
            Collection::WatchLater => "watchLater",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Collection::Watched => "watched",
            Collection::Favorites => "favorites",
            Collection::Classics => "classics",
            Collection::WatchLater => "watch-later",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Collection::Watched => "Watched Movies",
            Collection::Favorites => "Favorites",
            Collection::Classics => "Classics",
            Collection::WatchLater => "Watch Later",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "watched" => Ok(Collection::Watched),
            "favorites" => Ok(Collection::Favorites),
            "classics" => Ok(Collection::Classics),
            "watch-later" | "watchlater" | "watch_later" => Ok(Collection::WatchLater),
            other => Err(format!(
                "unknown collection '{}' (expected watched, favorites, classics or watch-later)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_are_distinct() {
        let keys: std::collections::HashSet<_> =
            Collection::ALL.iter().map(|c| c.storage_key()).collect();
        assert_eq!(keys.len(), Collection::ALL.len());
    }

    #[test]
    fn test_slug_round_trips_through_from_str() {
        for collection in Collection::ALL {
            assert_eq!(collection.slug().parse::<Collection>(), Ok(collection));
        }
    }

    #[test]
    fn test_from_str_accepts_loose_watch_later_spellings() {
        assert_eq!("WatchLater".parse::<Collection>(), Ok(Collection::WatchLater));
        assert_eq!("watch_later".parse::<Collection>(), Ok(Collection::WatchLater));
        assert!("backlog".parse::<Collection>().is_err());
    }
}
