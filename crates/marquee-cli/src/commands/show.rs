use crate::output::{Output, OutputFormat};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use marquee_catalog::CatalogProvider;
use marquee_models::Collection;
use marquee_store::{membership_of, Store};
use owo_colors::OwoColorize;
use serde_json::json;

pub fn run_show(
    movie_id: u32,
    store: &Store,
    catalog: &dyn CatalogProvider,
    output: &Output,
) -> Result<()> {
    let movie = catalog
        .by_id(movie_id)
        .ok_or_else(|| eyre!("Movie {} not found in the catalog", movie_id))?;

    let membership = membership_of(store, movie_id);
    let all_lists = store.lists().load_all();
    let list_names: Vec<&str> = membership
        .custom_list_ids
        .iter()
        .filter_map(|id| all_lists.iter().find(|l| &l.id == id))
        .map(|l| l.name.as_str())
        .collect();

    if output.format() != OutputFormat::Human {
        let collections: Vec<&str> = membership
            .collections
            .iter()
            .map(|c| c.slug())
            .collect();
        let lists: Vec<serde_json::Value> = membership
            .custom_list_ids
            .iter()
            .filter_map(|id| all_lists.iter().find(|l| &l.id == id))
            .map(|l| json!({ "id": l.id, "name": l.name }))
            .collect();
        output.json(&json!({
            "movie": movie,
            "collections": collections,
            "lists": lists,
        }));
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![Cell::new(format!("{} ({})", movie.title, movie.year))
        .fg(comfy_table::Color::Cyan)
        .add_attribute(comfy_table::Attribute::Bold)]);
    table.add_row(vec![
        Cell::new("Rating"),
        Cell::new(format!("{:.1}/10", movie.rating)),
    ]);
    for collection in Collection::ALL {
        let mark = if membership.collections.contains(&collection) {
            "✓".green().to_string()
        } else {
            "✗".red().to_string()
        };
        table.add_row(vec![Cell::new(collection.label()), Cell::new(mark)]);
    }
    table.add_row(vec![
        Cell::new("Custom Lists"),
        Cell::new(if list_names.is_empty() {
            "none".to_string()
        } else {
            list_names.join(", ")
        }),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    println!("{table}");
    println!("\n{}", movie.overview);

    Ok(())
}
