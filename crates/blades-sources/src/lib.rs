pub mod directory;
pub mod error;
pub mod factory;
pub mod http;
pub mod memory;
pub mod traits;

pub use directory::{DirectoryAssets, DirectoryCatalog};
pub use error::SourceError;
pub use factory::{assets_from_config, catalog_from_config, http_assets_from_config};
pub use http::HttpAssets;
pub use memory::{MemoryAssets, MemoryCatalog};
pub use traits::{AssetFetcher, CatalogProvider};
