use marquee_models::Movie;

/// Case-insensitive substring match on titles, no ranking.
///
/// A blank (empty or whitespace-only) query returns every movie. Otherwise
/// the query is matched as-is, so interior and leading whitespace count.
/// Catalog order is preserved either way.
pub fn search<'a>(query: &str, movies: &'a [Movie]) -> Vec<&'a Movie> {
    if query.trim().is_empty() {
        return movies.iter().collect();
    }

    let needle = query.to_lowercase();
    movies
        .iter()
        .filter(|movie| movie.title.to_lowercase().contains(&needle))
        .collect()
}
