use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use comfy_table::{Cell, Table};
use marquee_catalog::CatalogProvider;
use marquee_models::{Collection, Movie};
use marquee_store::Store;
use serde_json::json;
use std::collections::BTreeSet;
use tracing::debug;

pub fn run_library(store: &Store, catalog: &dyn CatalogProvider, output: &Output) -> Result<()> {
    let collections = store.collections();

    let mut sections: Vec<(Collection, Vec<&Movie>)> = Vec::new();
    let mut distinct: BTreeSet<u32> = BTreeSet::new();

    for collection in Collection::ALL {
        let ids = collections.load(collection);
        // Ids with no catalog entry are dropped at render time
        let members: Vec<&Movie> = ids.iter().filter_map(|id| catalog.by_id(*id)).collect();
        let stale = ids.len() - members.len();
        if stale > 0 {
            debug!(
                "Skipping {} unknown movie id(s) in {}",
                stale,
                collection.slug()
            );
        }
        distinct.extend(members.iter().map(|m| m.id));
        sections.push((collection, members));
    }

    if output.format() != OutputFormat::Human {
        let body: Vec<serde_json::Value> = sections
            .iter()
            .map(|(collection, members)| {
                json!({
                    "collection": collection.slug(),
                    "count": members.len(),
                    "movies": members
                        .iter()
                        .map(|m| json!({ "id": m.id, "title": m.title }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        output.json(&json!({
            "collections": body,
            "distinct_movies": distinct.len(),
        }));
        return Ok(());
    }

    for (collection, members) in &sections {
        let mut table = Table::new();
        table.set_header(vec![Cell::new(format!(
            "{} ({})",
            collection.label(),
            members.len()
        ))
        .fg(comfy_table::Color::Cyan)
        .add_attribute(comfy_table::Attribute::Bold)]);
        if members.is_empty() {
            table.add_row(vec![Cell::new("No movies yet")]);
        } else {
            for movie in members {
                table.add_row(vec![
                    Cell::new(movie.id),
                    Cell::new(&movie.title),
                    Cell::new(movie.year),
                ]);
            }
        }
        table.load_preset(comfy_table::presets::UTF8_FULL);
        table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
        println!("{table}");
        println!();
    }

    output.info(&format!(
        "{} distinct movie(s) across all collections",
        distinct.len()
    ));

    Ok(())
}
