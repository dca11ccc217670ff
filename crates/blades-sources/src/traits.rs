use async_trait::async_trait;
use blades_models::ItemRecord;
use crate::SourceError;

/// Host-side registry of items: world items plus named compendium packs.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    fn provider_name(&self) -> &str;

    /// Every item defined directly in the world, of any type
    async fn world_items(&self) -> Result<Vec<ItemRecord>, SourceError>;

    /// Contents of the compendium pack named `pack_name`, or None if no such pack exists
    async fn pack_items(&self, pack_name: &str) -> Result<Option<Vec<ItemRecord>>, SourceError>;
}

/// Fetches raw asset bytes by key (a `/`-separated relative path).
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    fn fetcher_name(&self) -> &str;

    async fn fetch(&self, key: &str) -> Result<Vec<u8>, SourceError>;
}

/// Reject keys that could escape the asset root
pub(crate) fn check_key(key: &str) -> Result<(), SourceError> {
    if key.is_empty() || key.starts_with('/') || key.split('/').any(|seg| seg == "..") {
        return Err(SourceError::InvalidKey(key.to_string()));
    }
    Ok(())
}
