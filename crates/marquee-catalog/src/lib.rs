mod builtin;
pub mod provider;
pub mod search;

pub use provider::{CatalogProvider, StaticCatalog};
pub use search::search;
