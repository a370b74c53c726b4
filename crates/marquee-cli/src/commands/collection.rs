use crate::output::Output;
use crate::MembershipAction;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use marquee_catalog::CatalogProvider;
use marquee_models::Collection;
use marquee_store::Store;

pub fn run_collection(
    collection: Collection,
    action: MembershipAction,
    movie_id: u32,
    store: &Store,
    catalog: &dyn CatalogProvider,
    output: &Output,
) -> Result<()> {
    let movie = catalog
        .by_id(movie_id)
        .ok_or_else(|| eyre!("Movie {} not found in the catalog", movie_id))?;

    let collections = store.collections();

    match action {
        MembershipAction::Add => {
            collections.add(collection, movie_id)?;
            output.success(&format!("Added \"{}\" to {}", movie.title, collection.label()));
        }
        MembershipAction::Remove => {
            collections.remove(collection, movie_id)?;
            output.success(&format!(
                "Removed \"{}\" from {}",
                movie.title,
                collection.label()
            ));
        }
        MembershipAction::Toggle => {
            let now_member = collections.toggle(collection, movie_id)?;
            if now_member {
                output.success(&format!("Added \"{}\" to {}", movie.title, collection.label()));
            } else {
                output.success(&format!(
                    "Removed \"{}\" from {}",
                    movie.title,
                    collection.label()
                ));
            }
        }
    }

    Ok(())
}
