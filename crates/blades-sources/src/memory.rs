use async_trait::async_trait;
use blades_models::ItemRecord;
use std::collections::HashMap;

use crate::traits::{AssetFetcher, CatalogProvider};
use crate::SourceError;

/// In-memory catalog for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    world: Vec<ItemRecord>,
    packs: HashMap<String, Vec<ItemRecord>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_world_items(mut self, items: Vec<ItemRecord>) -> Self {
        self.world = items;
        self
    }

    pub fn with_pack(mut self, name: impl Into<String>, items: Vec<ItemRecord>) -> Self {
        self.packs.insert(name.into(), items);
        self
    }
}

#[async_trait]
impl CatalogProvider for MemoryCatalog {
    fn provider_name(&self) -> &str {
        "memory"
    }

    async fn world_items(&self) -> Result<Vec<ItemRecord>, SourceError> {
        Ok(self.world.clone())
    }

    async fn pack_items(&self, pack_name: &str) -> Result<Option<Vec<ItemRecord>>, SourceError> {
        Ok(self.packs.get(pack_name).cloned())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    assets: HashMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.assets.insert(key.into(), bytes.into());
        self
    }
}

#[async_trait]
impl AssetFetcher for MemoryAssets {
    fn fetcher_name(&self) -> &str {
        "memory"
    }

    async fn fetch(&self, key: &str) -> Result<Vec<u8>, SourceError> {
        self.assets
            .get(key)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(key.to_string()))
    }
}
