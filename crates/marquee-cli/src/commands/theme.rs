use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use comfy_table::{Cell, Table};
use marquee_config::Config;
use marquee_models::{builtin_themes, theme_by_name};
use marquee_store::Store;
use serde_json::json;

pub fn run_theme(
    name: Option<String>,
    store: &Store,
    config: &Config,
    output: &Output,
) -> Result<()> {
    let theme_store = store.theme();

    match name {
        None => {
            let current = theme_store.current_or(&config.theme.default);
            let themes = builtin_themes();

            if output.format() != OutputFormat::Human {
                let available: Vec<&str> = themes.iter().map(|t| t.name.as_str()).collect();
                output.json(&json!({
                    "current": current,
                    "available": available,
                }));
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Theme").add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Background").add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Primary").add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Accent").add_attribute(comfy_table::Attribute::Bold),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

            for palette in &themes {
                let label = if palette.name == current {
                    format!("{} (current)", palette.name)
                } else {
                    palette.name.clone()
                };
                table.add_row(vec![
                    Cell::new(label),
                    Cell::new(&palette.colors.background),
                    Cell::new(&palette.colors.primary),
                    Cell::new(&palette.colors.accent),
                ]);
            }

            println!("{table}");
            Ok(())
        }
        Some(name) => {
            if theme_by_name(&name).is_none() {
                let available: Vec<String> =
                    builtin_themes().iter().map(|t| t.name.clone()).collect();
                output.error(&format!("Unknown theme \"{}\"", name));
                output.info(&format!("Available themes: {}", available.join(", ")));
                std::process::exit(1);
            }

            theme_store.set(&name)?;
            output.success(&format!("Theme set to {}", name));
            Ok(())
        }
    }
}
