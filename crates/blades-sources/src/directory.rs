use async_trait::async_trait;
use blades_models::ItemRecord;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::traits::{check_key, AssetFetcher, CatalogProvider};
use crate::SourceError;

/// Catalog backed by exported JSON documents:
/// `<root>/world/items.json` and `<root>/packs/<name>.json`.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    root: PathBuf,
}

impl DirectoryCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn world_path(&self) -> PathBuf {
        self.root.join("world").join("items.json")
    }

    fn pack_path(&self, pack_name: &str) -> PathBuf {
        self.root.join("packs").join(format!("{}.json", pack_name))
    }
}

/// Read a JSON array of items; None when the file does not exist
async fn read_items(path: &Path) -> Result<Option<Vec<ItemRecord>>, SourceError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(SourceError::Io { path: path.to_path_buf(), source: e }),
    };

    let items: Vec<ItemRecord> = serde_json::from_str(&content)
        .map_err(|e| SourceError::Json { path: path.to_path_buf(), source: e })?;
    debug!("Loaded {} items from {}", items.len(), path.display());
    Ok(Some(items))
}

#[async_trait]
impl CatalogProvider for DirectoryCatalog {
    fn provider_name(&self) -> &str {
        "directory"
    }

    async fn world_items(&self) -> Result<Vec<ItemRecord>, SourceError> {
        // A world without an export simply has no items
        Ok(read_items(&self.world_path()).await?.unwrap_or_default())
    }

    async fn pack_items(&self, pack_name: &str) -> Result<Option<Vec<ItemRecord>>, SourceError> {
        check_key(pack_name)?;
        if pack_name.contains('/') {
            return Err(SourceError::InvalidKey(pack_name.to_string()));
        }
        read_items(&self.pack_path(pack_name)).await
    }
}

/// Assets served from a local copy of the game system directory
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AssetFetcher for DirectoryAssets {
    fn fetcher_name(&self) -> &str {
        "directory"
    }

    async fn fetch(&self, key: &str) -> Result<Vec<u8>, SourceError> {
        check_key(key)?;
        let path = key.split('/').fold(self.root.clone(), |acc, seg| acc.join(seg));
        debug!("Reading asset {}", path.display());

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(SourceError::NotFound(key.to_string())),
            Err(e) => Err(SourceError::Io { path, source: e }),
        }
    }
}
