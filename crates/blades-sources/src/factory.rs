//! Build the capability objects described by a [`Config`].

use blades_config::{Config, PathManager};
use tracing::debug;

use crate::{AssetFetcher, CatalogProvider, DirectoryAssets, DirectoryCatalog, HttpAssets};

/// Directory catalog at `catalog.dir`, or the default data location
pub fn catalog_from_config(config: &Config, paths: &PathManager) -> Box<dyn CatalogProvider> {
    let dir = config.catalog.dir.clone().unwrap_or_else(|| paths.catalog_dir());
    debug!("Using catalog directory {}", dir.display());
    Box::new(DirectoryCatalog::new(dir))
}

/// Asset fetcher for the configured source.
///
/// A local directory wins over a base URL; with neither configured, assets
/// are read from the default data location.
pub fn assets_from_config(config: &Config, paths: &PathManager) -> Box<dyn AssetFetcher> {
    if let Some(dir) = &config.assets.local_dir {
        debug!("Using local assets at {}", dir.display());
        return Box::new(DirectoryAssets::new(dir.clone()));
    }

    if let Some(url) = &config.assets.base_url {
        debug!("Using remote assets at {}", url);
        return Box::new(HttpAssets::new(url.clone()));
    }

    Box::new(DirectoryAssets::new(paths.assets_dir()))
}

/// Remote fetcher for `assets.base_url`, regardless of any local directory.
///
/// None when no base URL is configured.
pub fn http_assets_from_config(config: &Config) -> Option<HttpAssets> {
    config.assets.base_url.as_ref().map(|url| {
        debug!("Using remote assets at {}", url);
        HttpAssets::new(url.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assets_from_config_precedence() {
        let paths = PathManager::from_base("/tmp/blades-test");
        let mut config = Config::default();
        assert_eq!(assets_from_config(&config, &paths).fetcher_name(), "directory");

        config.assets.base_url = Some("http://localhost:30000".to_string());
        assert_eq!(assets_from_config(&config, &paths).fetcher_name(), "http");

        config.assets.local_dir = Some("/opt/foundry/Data".into());
        assert_eq!(assets_from_config(&config, &paths).fetcher_name(), "directory");
    }

    #[test]
    fn test_http_assets_from_config() {
        let mut config = Config::default();
        assert!(http_assets_from_config(&config).is_none());

        config.assets.local_dir = Some("/opt/foundry/Data".into());
        config.assets.base_url = Some("http://localhost:30000/".to_string());
        let assets = http_assets_from_config(&config).unwrap();
        assert_eq!(assets.fetcher_name(), "http");
        assert_eq!(assets.url_for("clocks/a.svg"), "http://localhost:30000/clocks/a.svg");
    }

    #[test]
    fn test_catalog_from_config() {
        let paths = PathManager::from_base("/tmp/blades-test");
        let catalog = catalog_from_config(&Config::default(), &paths);
        assert_eq!(catalog.provider_name(), "directory");
    }
}
