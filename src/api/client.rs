//! Catalog trait and the reqwest implementation against the PokéAPI.

use std::time::Duration;

use async_trait::async_trait;

use crate::api::dto::{DetailDto, PageDto};
use crate::api::error::CatalogError;
use crate::config::ApiConfig;
use crate::detail::PokemonDetail;
use crate::list::PokemonListItem;

/// One decoded page of the catalog listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonPage {
    pub items: Vec<PokemonListItem>,
    /// Offset to request the following page with, `None` on the last page.
    pub next_offset: Option<u32>,
}

/// Boundary to the remote catalog. Responses are delivered
/// asynchronously; failures are values, never panics.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_page(&self, offset: u32) -> Result<PokemonPage, CatalogError>;

    async fn item_detail(&self, id: u32) -> Result<PokemonDetail, CatalogError>;
}

/// Production catalog client.
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
    page_limit: u32,
}

impl PokeApiClient {
    pub fn from_config(config: &ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to build catalog client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_limit: config.page_limit,
        }
    }
}

#[async_trait]
impl CatalogApi for PokeApiClient {
    async fn list_page(&self, offset: u32) -> Result<PokemonPage, CatalogError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("offset", offset.to_string()),
                ("limit", self.page_limit.to_string()),
            ])
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let page: PageDto = response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        // A malformed locator fails the whole page; items are never
        // silently dropped.
        let items = page
            .results
            .iter()
            .map(PokemonListItem::from_dto)
            .collect::<Result<Vec<_>, _>>()?;

        let next_offset = page.next.map(|_| offset + items.len() as u32);
        Ok(PokemonPage { items, next_offset })
    }

    async fn item_detail(&self, id: u32) -> Result<PokemonDetail, CatalogError> {
        let url = format!("{}/{}", self.base_url, id);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let detail: DetailDto = response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        Ok(PokemonDetail::from_dto(detail))
    }
}
