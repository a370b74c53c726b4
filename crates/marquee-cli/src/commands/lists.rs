use crate::output::{Output, OutputFormat};
use crate::ListCommands;
use chrono::DateTime;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use dialoguer::Confirm;
use marquee_catalog::CatalogProvider;
use marquee_models::CustomList;
use marquee_store::{ListManager, Store};
use serde_json::json;

pub fn run_lists(
    cmd: Option<ListCommands>,
    store: &Store,
    catalog: &dyn CatalogProvider,
    output: &Output,
) -> Result<()> {
    let mut manager = store.list_manager();

    match cmd {
        None => print_all(&manager, output),
        Some(ListCommands::Create { name, movie }) => {
            if let Some(movie_id) = movie {
                catalog
                    .by_id(movie_id)
                    .ok_or_else(|| eyre!("Movie {} not found in the catalog", movie_id))?;
            }
            let list = manager.create(&name, movie)?;
            output.success(&format!("Created list \"{}\" ({})", list.name, list.id));
            Ok(())
        }
        Some(ListCommands::Rename { list, new_name }) => {
            let target = resolve_list(&manager, &list)?;
            manager.rename(&target.id, &new_name)?;
            output.success(&format!(
                "Renamed \"{}\" to \"{}\"",
                target.name,
                new_name.trim()
            ));
            Ok(())
        }
        Some(ListCommands::Delete { list, yes }) => {
            let target = resolve_list(&manager, &list)?;
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!(
                        "Delete list \"{}\" and its {} movie(s)?",
                        target.name,
                        target.movie_ids.len()
                    ))
                    .default(false)
                    .interact()
                    .map_err(|e| eyre!("Failed to read confirmation: {}", e))?;
                if !confirmed {
                    output.info("Aborted");
                    return Ok(());
                }
            }
            manager.delete(&target.id)?;
            output.success(&format!("Deleted list \"{}\"", target.name));
            Ok(())
        }
        Some(ListCommands::Show { list }) => {
            let target = resolve_list(&manager, &list)?;
            print_one(&target, catalog, output);
            Ok(())
        }
        Some(ListCommands::Add { list, movie_id }) => {
            let movie = catalog
                .by_id(movie_id)
                .ok_or_else(|| eyre!("Movie {} not found in the catalog", movie_id))?;
            let target = resolve_list(&manager, &list)?;
            manager.add_movie(&target.id, movie_id)?;
            output.success(&format!("Added \"{}\" to \"{}\"", movie.title, target.name));
            Ok(())
        }
        Some(ListCommands::Remove { list, movie_id }) => {
            let movie = catalog
                .by_id(movie_id)
                .ok_or_else(|| eyre!("Movie {} not found in the catalog", movie_id))?;
            let target = resolve_list(&manager, &list)?;
            manager.remove_movie(&target.id, movie_id)?;
            output.success(&format!(
                "Removed \"{}\" from \"{}\"",
                movie.title, target.name
            ));
            Ok(())
        }
        Some(ListCommands::Toggle { list, movie_id }) => {
            let movie = catalog
                .by_id(movie_id)
                .ok_or_else(|| eyre!("Movie {} not found in the catalog", movie_id))?;
            let target = resolve_list(&manager, &list)?;
            let was_member = target.contains(movie_id);
            manager.toggle_membership(&target.id, movie_id)?;
            if was_member {
                output.success(&format!(
                    "Removed \"{}\" from \"{}\"",
                    movie.title, target.name
                ));
            } else {
                output.success(&format!("Added \"{}\" to \"{}\"", movie.title, target.name));
            }
            Ok(())
        }
    }
}

/// Resolve by exact id first, then by case-insensitive name.
fn resolve_list(manager: &ListManager, needle: &str) -> Result<CustomList> {
    if let Some(list) = manager.get(needle) {
        return Ok(list.clone());
    }

    let lowered = needle.to_lowercase();
    let mut matches = manager
        .lists()
        .iter()
        .filter(|l| l.name.to_lowercase() == lowered);
    match (matches.next(), matches.next()) {
        (Some(list), None) => Ok(list.clone()),
        (Some(_), Some(_)) => Err(eyre!(
            "Multiple lists are named \"{}\"; use the list id",
            needle
        )),
        (None, _) => Err(eyre!("No list matches \"{}\"", needle)),
    }
}

fn print_all(manager: &ListManager, output: &Output) -> Result<()> {
    let lists = manager.lists();

    if output.format() != OutputFormat::Human {
        let body: Vec<serde_json::Value> = lists
            .iter()
            .map(|l| {
                json!({
                    "id": l.id,
                    "name": l.name,
                    "movie_count": l.movie_ids.len(),
                    "created_at": l.created_at,
                })
            })
            .collect();
        output.json(&json!({ "lists": body, "total": lists.len() }));
        return Ok(());
    }

    if lists.is_empty() {
        output.info("No custom lists yet");
        output.println("\nExample: marquee lists create \"Movie Night\"");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Name").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Movies").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Created").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("ID").add_attribute(comfy_table::Attribute::Bold),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    for list in lists {
        table.add_row(vec![
            Cell::new(&list.name),
            Cell::new(list.movie_ids.len()),
            Cell::new(format_created(list.created_at)),
            Cell::new(&list.id),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn print_one(list: &CustomList, catalog: &dyn CatalogProvider, output: &Output) {
    if output.format() != OutputFormat::Human {
        let movies: Vec<serde_json::Value> = list
            .movie_ids
            .iter()
            .filter_map(|id| catalog.by_id(*id))
            .map(|m| json!({ "id": m.id, "title": m.title, "year": m.year }))
            .collect();
        output.json(&json!({
            "id": list.id,
            "name": list.name,
            "created_at": list.created_at,
            "movies": movies,
        }));
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![Cell::new(format!(
        "{} ({} movie(s), created {})",
        list.name,
        list.movie_ids.len(),
        format_created(list.created_at)
    ))
    .fg(comfy_table::Color::Cyan)
    .add_attribute(comfy_table::Attribute::Bold)]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    let mut shown = 0;
    for id in &list.movie_ids {
        // Stale ids are dropped at render time
        if let Some(movie) = catalog.by_id(*id) {
            table.add_row(vec![
                Cell::new(movie.id),
                Cell::new(&movie.title),
                Cell::new(movie.year),
            ]);
            shown += 1;
        }
    }
    if shown == 0 {
        table.add_row(vec![Cell::new("No movies yet")]);
    }

    println!("{table}");
}

fn format_created(created_at: i64) -> String {
    match DateTime::from_timestamp_millis(created_at) {
        Some(when) => when.format("%Y-%m-%d").to_string(),
        None => "unknown".to_string(),
    }
}
