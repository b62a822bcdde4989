//! HTTP Catalog Client
//!
//! `reqwest` against the PokeAPI. Works natively and in the browser
//! (reqwest uses `fetch` on wasm32).

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

use super::wire::{ListResponse, PokemonRecord};
use super::{selectable_categories, CatalogSource, Page};
use crate::config::CatalogConfig;
use crate::domain::{CatalogError, CatalogResult, Item};

#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http: reqwest::Client::new(), base_url }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn page_url(&self, offset: usize, limit: usize) -> String {
        format!("{}/pokemon?offset={}&limit={}", self.base_url, offset, limit)
    }

    fn item_url(&self, key: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, key)
    }

    fn categories_url(&self) -> String {
        format!("{}/type", self.base_url)
    }

    /// GET and decode; 404 maps to `NotFound(what)`
    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: impl FnOnce() -> String) -> CatalogResult<T> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(what()));
        }
        if !status.is_success() {
            return Err(CatalogError::Status { status: status.as_u16() });
        }
        response.json::<T>().await.map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalogClient {
    async fn list_page(&self, offset: usize, limit: usize) -> CatalogResult<Page> {
        let url = self.page_url(offset, limit);
        let list: ListResponse = self.get_json(&url, || "Pokemon list".to_string()).await?;
        Ok(list.into_page())
    }

    async fn get_by_locator(&self, locator: &str) -> CatalogResult<Item> {
        let record: PokemonRecord = self.get_json(locator, || locator.to_string()).await?;
        Ok(record.into())
    }

    async fn get_by_id(&self, id: u32) -> CatalogResult<Item> {
        let url = self.item_url(&id.to_string());
        let record: PokemonRecord = self.get_json(&url, || format!("Pokemon #{}", id)).await?;
        Ok(record.into())
    }

    async fn get_by_name(&self, name: &str) -> CatalogResult<Item> {
        let url = self.item_url(&name.to_lowercase());
        let record: PokemonRecord = self.get_json(&url, || format!("Pokemon \"{}\"", name)).await?;
        Ok(record.into())
    }

    async fn list_categories(&self) -> CatalogResult<Vec<String>> {
        let url = self.categories_url();
        let list: ListResponse = self.get_json(&url, || "Type list".to_string()).await?;
        Ok(selectable_categories(list.into_names()))
    }
}
