use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub duplicates: DuplicateRules,
    #[serde(default)]
    pub clocks: ClockConfig,
    #[serde(default)]
    pub assets: AssetConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub schema: SchemaConfig,
}

/// Type tags driving duplicate-item detection
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DuplicateRules {
    /// At most one item of each of these types may be owned at a time
    #[serde(default = "default_distinct_types")]
    pub distinct_types: Vec<String>,

    /// Items of these types always coexist, regardless of name collisions
    #[serde(default = "default_exempt_types")]
    pub exempt_types: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClockConfig {
    #[serde(default = "default_clock_sizes")]
    pub sizes: Vec<u32>,
    #[serde(default = "default_clock_size")]
    pub default_size: u32,
    #[serde(default = "default_fill_color")]
    pub fill_color: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AssetConfig {
    /// Directory (relative to the system root) holding the progress clock SVGs
    #[serde(default = "default_clock_root")]
    pub clock_root: String,
    /// Local copy of the system assets; takes precedence over `base_url`
    #[serde(default)]
    pub local_dir: Option<PathBuf>,
    /// Host serving the system assets over HTTP
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Directory holding `world/items.json` and `packs/<name>.json`
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct SchemaConfig {
    /// JSON attribute schema; the stock character sheet is used when unset
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("clock sizes cannot be empty")]
    NoClockSizes,
    #[error("clock size must be positive")]
    ZeroClockSize,
    #[error("default clock size {0} is not one of the configured sizes")]
    DefaultSizeNotListed(u32),
    #[error("item type '{0}' is both distinct and exempt")]
    ConflictingType(String),
    #[error("asset base_url must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),
}

pub fn default_distinct_types() -> Vec<String> {
    ["crew_type", "crew_reputation", "class", "vice", "background", "heritage"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn default_exempt_types() -> Vec<String> {
    vec!["item".to_string()]
}

fn default_clock_sizes() -> Vec<u32> {
    vec![4, 6, 8, 12]
}

fn default_clock_size() -> u32 {
    4
}

fn default_fill_color() -> String {
    "#000000".to_string()
}

fn default_clock_root() -> String {
    "systems/blades-in-the-dark/styles/assets/progressclocks-svg".to_string()
}

impl Default for DuplicateRules {
    fn default() -> Self {
        Self {
            distinct_types: default_distinct_types(),
            exempt_types: default_exempt_types(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            sizes: default_clock_sizes(),
            default_size: default_clock_size(),
            fill_color: default_fill_color(),
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            clock_root: default_clock_root(),
            local_dir: None,
            base_url: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clocks.sizes.is_empty() {
            return Err(ConfigError::NoClockSizes);
        }
        if self.clocks.sizes.contains(&0) {
            return Err(ConfigError::ZeroClockSize);
        }
        if !self.clocks.sizes.contains(&self.clocks.default_size) {
            return Err(ConfigError::DefaultSizeNotListed(self.clocks.default_size));
        }

        if let Some(conflict) = self
            .duplicates
            .distinct_types
            .iter()
            .find(|t| self.duplicates.exempt_types.contains(t))
        {
            return Err(ConfigError::ConflictingType(conflict.clone()));
        }

        if let Some(url) = &self.assets.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidBaseUrl(url.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.clocks.sizes = vec![4, 8];
        config.clocks.fill_color = "crimson".to_string();
        config.assets.base_url = Some("https://vtt.example.org".to_string());

        let path = file.path().to_path_buf();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.clocks.sizes, vec![4, 8]);
        assert_eq!(loaded.clocks.fill_color, "crimson");
        assert_eq!(loaded.assets.base_url.as_deref(), Some("https://vtt.example.org"));
        assert_eq!(loaded.duplicates.exempt_types, vec!["item".to_string()]);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[clocks]\ndefault_size = 6\n").unwrap();
        assert_eq!(config.clocks.default_size, 6);
        assert_eq!(config.clocks.sizes, vec![4, 6, 8, 12]);
        assert_eq!(config.duplicates.distinct_types.len(), 6);
        assert!(config.catalog.dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.clocks.default_size, 4);
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.clocks.default_size = 5;
        assert_eq!(config.validate(), Err(ConfigError::DefaultSizeNotListed(5)));

        config.clocks.default_size = 4;
        config.duplicates.exempt_types.push("vice".to_string());
        assert_eq!(config.validate(), Err(ConfigError::ConflictingType("vice".to_string())));

        config.duplicates = DuplicateRules::default();
        config.assets.base_url = Some("ftp://example.org".to_string());
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBaseUrl(_))));

        config.assets.base_url = None;
        config.clocks.sizes.clear();
        assert_eq!(config.validate(), Err(ConfigError::NoClockSizes));
    }
}
