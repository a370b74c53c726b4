pub mod backend;
pub mod collections;
pub mod error;
pub mod lists;
pub mod membership;
pub mod notify;
pub mod store;
pub mod theme;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use collections::CollectionStore;
pub use error::StoreError;
pub use lists::{CustomListStore, ListManager, CUSTOM_LISTS_KEY};
pub use membership::{membership_of, Membership};
pub use notify::{StoreChange, SubscriptionId};
pub use store::Store;
pub use theme::{ThemeStore, THEME_KEY};
