use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tracing::debug;

use crate::traits::{check_key, AssetFetcher};
use crate::SourceError;

/// Assets fetched from a running host over HTTP
#[derive(Clone)]
pub struct HttpAssets {
    client: Arc<Client>,
    base_url: String,
}

impl HttpAssets {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(client),
            base_url: base_url.into(),
        }
    }

    /// Full URL for `key`, percent-encoding each path segment
    pub fn url_for(&self, key: &str) -> String {
        let path: Vec<String> = key
            .split('/')
            .map(|seg| urlencoding::encode(seg).into_owned())
            .collect();
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.join("/"))
    }
}

#[async_trait]
impl AssetFetcher for HttpAssets {
    fn fetcher_name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, key: &str) -> Result<Vec<u8>, SourceError> {
        check_key(key)?;
        let url = self.url_for(key);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(key.to_string()));
        }
        if !status.is_success() {
            return Err(SourceError::Status { status: status.as_u16(), url });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_encodes_segments() {
        let assets = HttpAssets::new("http://localhost:30000/");
        assert_eq!(
            assets.url_for("systems/bitd/Progress Clock 4-2.svg"),
            "http://localhost:30000/systems/bitd/Progress%20Clock%204-2.svg"
        );
    }

    #[tokio::test]
    async fn test_fetch_rejects_escaping_key() {
        let assets = HttpAssets::new("http://localhost:30000");
        let err = assets.fetch("../config.json").await.unwrap_err();
        assert!(matches!(err, SourceError::InvalidKey(_)));
    }
}
