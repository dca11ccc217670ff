use super::config_file_path;
use crate::output::Output;
use crate::ConfigCommands;
use blades_config::{Config, PathManager};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde_json::json;
use std::path::{Path, PathBuf};

pub fn run_config(cmd: ConfigCommands, config_override: Option<PathBuf>, output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let config_file = config_file_path(&paths, config_override);

    match cmd {
        ConfigCommands::Show => show_config(&config_file, output),
        ConfigCommands::Init { force } => init_config(&paths, &config_file, force, output),
        ConfigCommands::Path => {
            let path = config_file.display().to_string();
            output.result(&path, json!({ "config_file": path }));
            Ok(())
        }
    }
}

fn show_config(config_file: &Path, output: &Output) -> Result<()> {
    if !config_file.exists() {
        output.warn(format!("Configuration file not found at: {}", config_file.display()));
        output.info("Showing defaults. Run 'blades config init' to write them to disk.");
    }

    let config = Config::load_or_default(config_file)
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;

    if let Err(e) = config.validate() {
        output.warn(format!("Configuration is invalid: {}", e));
    }

    let optional = |p: &Option<PathBuf>| p.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "-".to_string());
    let join = |items: &[String]| items.join(", ");

    let rows = vec![
        vec!["Config file".to_string(), config_file.display().to_string()],
        vec!["Distinct types".to_string(), join(&config.duplicates.distinct_types)],
        vec!["Exempt types".to_string(), join(&config.duplicates.exempt_types)],
        vec![
            "Clock sizes".to_string(),
            config.clocks.sizes.iter().map(u32::to_string).collect::<Vec<_>>().join(", "),
        ],
        vec!["Default clock size".to_string(), config.clocks.default_size.to_string()],
        vec!["Fill colour".to_string(), config.clocks.fill_color.clone()],
        vec!["Clock root".to_string(), config.assets.clock_root.clone()],
        vec!["Local assets".to_string(), optional(&config.assets.local_dir)],
        vec!["Asset URL".to_string(), config.assets.base_url.clone().unwrap_or_else(|| "-".to_string())],
        vec!["Catalog".to_string(), optional(&config.catalog.dir)],
        vec!["Schema".to_string(), optional(&config.schema.file)],
    ];

    let data = json!({
        "config_file": config_file.display().to_string(),
        "config": serde_json::to_value(&config)?,
    });
    output.table(&["Setting", "Value"], rows, data);

    Ok(())
}

fn init_config(paths: &PathManager, config_file: &Path, force: bool, output: &Output) -> Result<()> {
    if config_file.exists() && !force {
        output.warn(format!("Configuration already exists at {}", config_file.display()));
        output.info("Use --force to overwrite it with defaults.");
        return Ok(());
    }

    paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create blades directories: {}", e))?;
    Config::default()
        .save_to_file(config_file)
        .map_err(|e| eyre!("Failed to write config to {}: {}", config_file.display(), e))?;

    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}
