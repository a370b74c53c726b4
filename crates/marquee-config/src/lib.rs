pub mod config;
pub mod paths;

pub use config::{CatalogConfig, Config, ThemeConfig};
pub use paths::{Paths, DATA_DIR_ENV};
