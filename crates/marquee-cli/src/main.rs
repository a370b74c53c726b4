use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::eyre;
use commands::{browse, collection, library, lists, reset, show, theme, watched};
use marquee_catalog::{CatalogProvider, StaticCatalog};
use marquee_config::{Config, Paths};
use marquee_models::Collection;
use marquee_store::{FileBackend, Store};
use std::path::PathBuf;
use std::sync::Arc;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Marquee - track what you watch from the terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Base directory for config and persisted data
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog, optionally filtered by title
    #[command(long_about = "List the movie catalog. With a query, performs a case-insensitive substring search against titles; without one, shows every movie. Watched movies are marked.")]
    Browse {
        /// Title substring to search for
        query: Option<String>,
    },

    /// Show one movie in detail
    #[command(long_about = "Show a movie's metadata together with everywhere it currently appears: the fixed collections and any custom lists.")]
    Show {
        /// Catalog id of the movie
        movie_id: u32,
    },

    /// Toggle a movie's watched state
    Watched {
        /// Catalog id of the movie
        movie_id: u32,
    },

    /// Manage the fixed collections
    #[command(long_about = "Add, remove, or toggle a movie in one of the four fixed collections: watched, favorites, classics, or watch-later.")]
    Collection {
        /// Which collection: watched, favorites, classics, or watch-later
        collection: Collection,

        /// What to do with the movie
        #[arg(value_enum)]
        action: MembershipAction,

        /// Catalog id of the movie
        movie_id: u32,
    },

    /// Show the four fixed collections and library stats
    Library,

    /// Manage custom lists
    #[command(long_about = "Create, rename, delete, and edit custom lists. Without a subcommand, prints every list. Lists are referenced by id or by case-insensitive name.")]
    Lists {
        #[command(subcommand)]
        cmd: Option<ListCommands>,
    },

    /// Show or change the color theme
    Theme {
        /// Theme name to switch to; omit to see the current selection
        name: Option<String>,
    },

    /// Clear persisted state
    #[command(long_about = "Clear persisted state. Use --collections for the four fixed collections, --lists for custom lists, --theme for the theme selection, or --all for everything.")]
    Reset {
        /// Clear the four fixed collections
        #[arg(long, action = ArgAction::SetTrue)]
        collections: bool,

        /// Clear all custom lists
        #[arg(long, action = ArgAction::SetTrue)]
        lists: bool,

        /// Clear the theme selection
        #[arg(long, action = ArgAction::SetTrue)]
        theme: bool,

        /// Clear everything
        #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["collections", "lists", "theme"])]
        all: bool,

        /// Skip the confirmation prompt
        #[arg(short, long, action = ArgAction::SetTrue)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ListCommands {
    /// Create a new list
    Create {
        /// Name of the new list
        name: String,

        /// Seed the list with one movie
        #[arg(long, value_name = "MOVIE_ID")]
        movie: Option<u32>,
    },

    /// Rename a list
    Rename {
        /// List id or name
        list: String,

        /// New name for the list
        new_name: String,
    },

    /// Delete a list
    Delete {
        /// List id or name
        list: String,

        /// Skip the confirmation prompt
        #[arg(short, long, action = ArgAction::SetTrue)]
        yes: bool,
    },

    /// Show one list and its movies
    Show {
        /// List id or name
        list: String,
    },

    /// Add a movie to a list
    Add {
        /// List id or name
        list: String,

        /// Catalog id of the movie
        movie_id: u32,
    },

    /// Remove a movie from a list
    Remove {
        /// List id or name
        list: String,

        /// Catalog id of the movie
        movie_id: u32,
    },

    /// Toggle a movie's membership in a list
    Toggle {
        /// List id or name
        list: String,

        /// Catalog id of the movie
        movie_id: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MembershipAction {
    Add,
    Remove,
    Toggle,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet).map_err(|e| eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    let paths = match &cli.data_dir {
        Some(dir) => Paths::at(dir),
        None => Paths::new().map_err(|e| eyre!("Failed to resolve data directory: {}", e))?,
    };
    let config = Config::load_or_default(&paths.config_file())
        .map_err(|e| eyre!("Failed to load config: {}", e))?;
    config
        .validate()
        .map_err(|e| eyre!("Invalid config: {}", e))?;
    paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create data directories: {}", e))?;

    let store = Store::new(Arc::new(FileBackend::new(paths.storage_dir())));
    let catalog = load_catalog(&config)?;

    match cli.command {
        Commands::Browse { query } => browse::run_browse(query, &store, catalog.as_ref(), &output),
        Commands::Show { movie_id } => show::run_show(movie_id, &store, catalog.as_ref(), &output),
        Commands::Watched { movie_id } => {
            watched::run_watched(movie_id, &store, catalog.as_ref(), &output)
        }
        Commands::Collection {
            collection,
            action,
            movie_id,
        } => collection::run_collection(collection, action, movie_id, &store, catalog.as_ref(), &output),
        Commands::Library => library::run_library(&store, catalog.as_ref(), &output),
        Commands::Lists { cmd } => lists::run_lists(cmd, &store, catalog.as_ref(), &output),
        Commands::Theme { name } => theme::run_theme(name, &store, &config, &output),
        Commands::Reset {
            collections,
            lists,
            theme,
            all,
            yes,
        } => reset::run_reset(collections, lists, theme, all, yes, &store, &output),
    }
}

fn load_catalog(config: &Config) -> color_eyre::Result<Box<dyn CatalogProvider>> {
    match &config.catalog.file {
        Some(path) => {
            let catalog = StaticCatalog::from_json_file(path)
                .map_err(|e| eyre!("Failed to load catalog: {}", e))?;
            Ok(Box::new(catalog))
        }
        None => Ok(Box::new(StaticCatalog::builtin())),
    }
}
