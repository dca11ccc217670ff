// Listing every available item of a type across the world and its compendium

use blades_models::ItemRecord;
use blades_sources::{CatalogProvider, SourceError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no compendium pack named '{0}'")]
    PackNotFound(String),

    #[error("catalog provider '{provider}' failed: {source}")]
    Source {
        provider: String,
        #[source]
        source: SourceError,
    },
}

/// World items of `item_type` followed by the pack of the same name, sorted
/// by case-insensitive name. Items without a name sort first.
pub async fn all_items_by_type(
    provider: &dyn CatalogProvider,
    item_type: &str,
) -> Result<Vec<ItemRecord>, CatalogError> {
    let (world, pack) = futures::try_join!(provider.world_items(), provider.pack_items(item_type))
        .map_err(|source| CatalogError::Source {
            provider: provider.provider_name().to_string(),
            source,
        })?;

    let pack = pack.ok_or_else(|| CatalogError::PackNotFound(item_type.to_string()))?;

    let world_count = world.len();
    let pack_count = pack.len();

    let mut items: Vec<ItemRecord> = world
        .into_iter()
        .filter(|item| item.type_str() == Some(item_type))
        .chain(pack)
        .collect();
    items.sort_by_cached_key(|item| item.name.as_deref().map(str::to_uppercase));

    debug!(
        "all_items_by_type: type={}, world_count={}, pack_count={}, result_count={}",
        item_type,
        world_count,
        pack_count,
        items.len()
    );

    Ok(items)
}
