use clap::{ArgAction, Parser, Subcommand};
use commands::{clock, config, items, labels, AppContext};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "blades")]
#[command(about = "Blades - item, label and clock helpers for the Blades in the Dark game system")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors and results
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Configuration file (defaults to config.toml in the blades config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write logs to a daily-rotated file instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the owned items that adding a candidate item would replace
    #[command(long_about = "Compare a candidate item (JSON object) against the owner's existing items (JSON array) and print the ids of the items to remove. Items sharing the candidate's name are duplicates; for distinct types (class, vice, heritage, ...) any item of the same type is too. Exempt types never produce duplicates.")]
    Dupes {
        /// JSON file holding the candidate item
        #[arg(long, value_name = "FILE")]
        candidate: PathBuf,

        /// JSON file holding the array of existing items
        #[arg(long, value_name = "FILE")]
        existing: PathBuf,
    },
    /// Resolve a dotted property path in a JSON document
    Get {
        /// JSON document to read
        file: PathBuf,

        /// Dotted path, e.g. system.attributes.insight.label
        path: String,
    },
    /// Look up labels for an attribute or action
    Labels {
        /// Attribute or action key
        name: String,

        /// JSON attribute schema (overrides the configured schema)
        #[arg(long, value_name = "FILE")]
        schema: Option<PathBuf>,
    },
    /// Print <option> elements for a clock size selector
    ClockOptions {
        /// Available sizes (defaults to the configured sizes)
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<u32>>,

        /// Size selected when there is no current size
        #[arg(long = "default")]
        default_size: Option<u32>,

        /// Currently selected size
        #[arg(long)]
        current: Option<u32>,
    },
    /// Render a progress clock as a recoloured SVG data URI
    ClockUri {
        /// Number of segments
        kind: u32,

        /// Filled segments
        value: u32,

        /// Fill colour (defaults to the configured colour)
        #[arg(long)]
        fill: Option<String>,

        /// Fetch the image from the configured asset URL even when a local directory is set
        #[arg(long, action = ArgAction::SetTrue)]
        http: bool,
    },
    /// List every item of a type from the world and its compendium pack
    Items {
        /// Item type, also the compendium pack name
        item_type: String,

        /// Catalog directory (overrides the configured one)
        #[arg(long, value_name = "DIR")]
        catalog: Option<PathBuf>,
    },
    /// Create a blank owned item of a type
    NewItem {
        /// Item type
        item_type: String,
    },
    /// Show or initialise configuration
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Print the configuration file location
    Path,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    let config_path = cli.config;
    let ctx = || AppContext::load(config_path.clone());

    match cli.command {
        Commands::Dupes { candidate, existing } => items::run_dupes(&ctx()?, &candidate, &existing, &output),
        Commands::Get { file, path } => items::run_get(&file, &path, &output),
        Commands::Labels { name, schema } => labels::run_labels(&ctx()?, &name, schema, &output),
        Commands::ClockOptions { sizes, default_size, current } => {
            clock::run_clock_options(&ctx()?, sizes, default_size, current, &output)
        }
        Commands::ClockUri { kind, value, fill, http } => {
            clock::run_clock_uri(&ctx()?, kind, value, fill, http, &output).await
        }
        Commands::Items { item_type, catalog } => items::run_items(&ctx()?, &item_type, catalog, &output).await,
        Commands::NewItem { item_type } => items::run_new_item(&item_type, &output),
        Commands::Config { cmd } => config::run_config(cmd.unwrap_or(ConfigCommands::Show), config_path.clone(), &output),
    }
}
