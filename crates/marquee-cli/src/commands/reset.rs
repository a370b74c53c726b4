use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use dialoguer::Confirm;
use marquee_store::Store;

pub fn run_reset(
    collections: bool,
    lists: bool,
    theme: bool,
    all: bool,
    yes: bool,
    store: &Store,
    output: &Output,
) -> Result<()> {
    let (collections, lists, theme) = if all {
        (true, true, true)
    } else {
        (collections, lists, theme)
    };

    if !collections && !lists && !theme {
        output.warn("No reset option specified. Use --collections, --lists, --theme, or --all");
        output.println("\nExample: marquee reset --lists");
        return Ok(());
    }

    let mut targets = Vec::new();
    if collections {
        targets.push("the four fixed collections");
    }
    if lists {
        targets.push("all custom lists");
    }
    if theme {
        targets.push("the theme selection");
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Clear {}?", targets.join(" and ")))
            .default(false)
            .interact()
            .map_err(|e| eyre!("Failed to read confirmation: {}", e))?;
        if !confirmed {
            output.info("Aborted");
            return Ok(());
        }
    }

    if collections {
        store.clear_collections()?;
        output.success("Cleared the fixed collections");
    }
    if lists {
        store.clear_lists()?;
        output.success("Cleared all custom lists");
    }
    if theme {
        store.clear_theme()?;
        output.success("Cleared the theme selection");
    }

    Ok(())
}
