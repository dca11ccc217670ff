pub mod clock;
pub mod config;
pub mod items;
pub mod labels;

use blades_config::{Config, PathManager};
use blades_models::AttributeSchema;
use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration and paths shared by every command
pub struct AppContext {
    pub paths: PathManager,
    pub config: Config,
}

/// Config file in effect: the explicit one, or the default location
pub fn config_file_path(paths: &PathManager, config_override: Option<PathBuf>) -> PathBuf {
    config_override.unwrap_or_else(|| paths.config_file())
}

impl AppContext {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let paths = PathManager::default();
        let config_file = config_file_path(&paths, config_override);

        if !config_file.exists() {
            debug!("No config file at {}, using defaults", config_file.display());
        }

        let config = Config::load_or_default(&config_file)
            .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
        config
            .validate()
            .wrap_err_with(|| format!("Invalid configuration in {}", config_file.display()))?;

        Ok(Self { paths, config })
    }

    /// Attribute schema from `override_path`, the configured file, or the stock sheet
    pub fn schema(&self, override_path: Option<PathBuf>) -> Result<AttributeSchema> {
        match override_path.or_else(|| self.config.schema.file.clone()) {
            Some(path) => read_json(&path),
            None => Ok(AttributeSchema::standard()),
        }
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).wrap_err_with(|| format!("Invalid JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blades_models::ItemRecord;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_path_override() {
        let paths = PathManager::from_base("/srv/blades");
        assert_eq!(config_file_path(&paths, None), PathBuf::from("/srv/blades/config.toml"));
        assert_eq!(
            config_file_path(&paths, Some(PathBuf::from("/tmp/alt.toml"))),
            PathBuf::from("/tmp/alt.toml")
        );
    }

    #[test]
    fn test_read_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, r#"[{"_id": "a", "type": "vice", "name": "Faith"}]"#).unwrap();

        let items: Vec<ItemRecord> = read_json(&path).unwrap();
        assert_eq!(items[0].name_str(), Some("Faith"));

        assert!(read_json::<Vec<ItemRecord>>(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_schema_defaults_to_standard() {
        let ctx = AppContext { paths: PathManager::from_base("/srv/blades"), config: Config::default() };
        assert_eq!(ctx.schema(None).unwrap(), AttributeSchema::standard());
    }
}
