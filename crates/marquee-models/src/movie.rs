use serde::{Deserialize, Serialize};

/// Catalog identifier for a movie. Assigned by the catalog, stable, never
/// reused.
pub type MovieId = u32;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: u32,
    pub poster: String,
    pub backdrop: String,
    pub overview: String,
    pub rating: f64,
}
