use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use comfy_table::{Cell, Table};
use marquee_catalog::{search, CatalogProvider};
use marquee_models::Collection;
use marquee_store::Store;
use owo_colors::OwoColorize;
use serde_json::json;

pub fn run_browse(
    query: Option<String>,
    store: &Store,
    catalog: &dyn CatalogProvider,
    output: &Output,
) -> Result<()> {
    let all = catalog.all();
    let query = query.unwrap_or_default();
    let matches = search(&query, all);
    let watched = store.collections().load(Collection::Watched);

    if output.format() != OutputFormat::Human {
        let movies: Vec<serde_json::Value> = matches
            .iter()
            .map(|movie| {
                json!({
                    "id": movie.id,
                    "title": movie.title,
                    "year": movie.year,
                    "rating": movie.rating,
                    "watched": watched.contains(&movie.id),
                })
            })
            .collect();
        output.json(&json!({
            "movies": movies,
            "total": matches.len(),
        }));
        return Ok(());
    }

    if matches.is_empty() {
        output.warn(&format!("No movies match \"{}\"", query.trim()));
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("ID").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Year").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Rating").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Watched").add_attribute(comfy_table::Attribute::Bold),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    for movie in &matches {
        let mark = if watched.contains(&movie.id) {
            "✓".green().to_string()
        } else {
            String::new()
        };
        table.add_row(vec![
            Cell::new(movie.id),
            Cell::new(&movie.title),
            Cell::new(movie.year),
            Cell::new(format!("{:.1}", movie.rating)),
            Cell::new(mark),
        ]);
    }

    println!("{table}");

    if !query.trim().is_empty() {
        output.info(&format!(
            "{} of {} movies match \"{}\"",
            matches.len(),
            all.len(),
            query.trim()
        ));
    }

    Ok(())
}
