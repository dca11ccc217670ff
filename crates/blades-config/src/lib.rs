pub mod config;
pub mod paths;

pub use config::{AssetConfig, CatalogConfig, ClockConfig, Config, ConfigError, DuplicateRules, SchemaConfig, default_distinct_types, default_exempt_types};
pub use paths::{PathManager, home_override};
