//! Remote Items API
//!
//! The seam between the list synchronizer and the `/items` resource.
//! `RestItemsApi` is the HTTP implementation; tests substitute their own.

mod rest;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Item;

pub use rest::RestItemsApi;

/// Remote call failures
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response was not ok: {detail}")]
    Status { status: u16, detail: String },
}

impl ApiError {
    /// Non-2xx response; the body is the detail, or the status code when empty
    pub fn from_status(status: u16, body: String) -> Self {
        let detail = if body.trim().is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };
        ApiError::Status { status, detail }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The four operations of the remote collection resource.
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait ItemsApi {
    /// `GET /items`
    async fn list_items(&self) -> ApiResult<Vec<Item>>;

    /// `POST /items`
    async fn create_item(&self, item: &Item) -> ApiResult<()>;

    /// `DELETE /items/{id}`
    async fn delete_item(&self, id: &str) -> ApiResult<()>;

    /// `PATCH /items/{id}` with `{"checked": ..}`
    async fn set_checked(&self, id: &str, checked: bool) -> ApiResult<()>;
}
