use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use marquee_catalog::CatalogProvider;
use marquee_models::Collection;
use marquee_store::Store;

pub fn run_watched(
    movie_id: u32,
    store: &Store,
    catalog: &dyn CatalogProvider,
    output: &Output,
) -> Result<()> {
    let movie = catalog
        .by_id(movie_id)
        .ok_or_else(|| eyre!("Movie {} not found in the catalog", movie_id))?;

    let now_watched = store.collections().toggle(Collection::Watched, movie_id)?;

    if now_watched {
        output.success(&format!("Marked \"{}\" as watched", movie.title));
    } else {
        output.success(&format!("Removed \"{}\" from watched", movie.title));
    }

    Ok(())
}
