use anyhow::{Context, Result};
use marquee_models::{Movie, MovieId};
use std::path::Path;
use tracing::info;

/// Read-only movie lookup. The catalog is externally supplied and never
/// mutated by the stores; consumers hold it behind this trait so the data
/// source can be swapped without touching them.
pub trait CatalogProvider {
    /// Every movie, in catalog order.
    fn all(&self) -> &[Movie];

    fn by_id(&self, id: MovieId) -> Option<&Movie> {
        self.all().iter().find(|movie| movie.id == id)
    }
}

/// An in-memory catalog, loaded once and fixed for the life of the process.
pub struct StaticCatalog {
    movies: Vec<Movie>,
}

impl StaticCatalog {
    /// The bundled catalog.
    pub fn builtin() -> Self {
        Self {
            movies: crate::builtin::builtin_movies(),
        }
    }

    /// Catalog from a JSON array of movies on disk. Unlike user state, a
    /// broken catalog file is an error rather than an empty default.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {:?}", path))?;
        let movies: Vec<Movie> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse catalog file {:?}", path))?;
        info!("Loaded catalog from {:?}: {} movies", path, movies.len());
        Ok(Self { movies })
    }
}

impl CatalogProvider for StaticCatalog {
    fn all(&self) -> &[Movie] {
        &self.movies
    }
}
