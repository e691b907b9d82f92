//! HTTP client for the `/items` resource.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, Method, RequestBuilder, Response};

use super::{ApiError, ApiResult, ItemsApi};
use crate::models::{CheckedPatch, Item};

/// reqwest-backed `ItemsApi`; uses `fetch` when compiled to wasm32
#[derive(Debug, Clone)]
pub struct RestItemsApi {
    base_url: String,
    client: Client,
}

impl RestItemsApi {
    /// Create a client for the API rooted at `base_url` (e.g. `http://localhost:3000`)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/items/{}", self.base_url, utf8_percent_encode(id, NON_ALPHANUMERIC))
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        log::debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    /// Pass 2xx responses through; turn anything else into `ApiError::Status`
    async fn check_status(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Request failed with {}: {}", status, body);
            Err(ApiError::from_status(status.as_u16(), body))
        }
    }
}

#[async_trait(?Send)]
impl ItemsApi for RestItemsApi {
    async fn list_items(&self) -> ApiResult<Vec<Item>> {
        let response = self.request(Method::GET, &self.items_url()).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn create_item(&self, item: &Item) -> ApiResult<()> {
        let response = self
            .request(Method::POST, &self.items_url())
            .json(item)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn delete_item(&self, id: &str) -> ApiResult<()> {
        let response = self.request(Method::DELETE, &self.item_url(id)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn set_checked(&self, id: &str, checked: bool) -> ApiResult<()> {
        let response = self
            .request(Method::PATCH, &self.item_url(id))
            .json(&CheckedPatch { checked })
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
