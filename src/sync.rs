//! List Synchronizer
//!
//! Mirrors every mutation to the remote `/items` collection and applies it to
//! local state only once the remote call has succeeded. Calls are not ordered
//! against each other: whichever response lands last decides local state.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::api::{ApiError, ItemsApi};
use crate::models::Item;
use crate::store::ListState;

/// Synchronizer failures
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Item {0} not found")]
    NotFound(String),

    #[error("Item label must not be empty")]
    EmptyLabel,

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type SyncResult<T> = Result<T, SyncError>;

/// Access to the shared list state.
///
/// Writes re-read the current state, so results of concurrent calls are
/// applied to whatever the list looks like when they arrive.
pub trait ListHandle {
    fn read_state<R>(&self, f: impl FnOnce(&ListState) -> R) -> R;
    fn write_state<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> R;
}

impl ListHandle for Rc<RefCell<ListState>> {
    fn read_state<R>(&self, f: impl FnOnce(&ListState) -> R) -> R {
        f(&self.borrow())
    }

    fn write_state<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Milliseconds since the Unix epoch (browser clock on wasm32)
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Case-insensitive substring filter over item labels; order is preserved
pub fn filter_items(items: &[Item], query: &str) -> Vec<Item> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Clone)]
pub struct ListSync<A, H> {
    api: A,
    state: H,
}

impl<A: ItemsApi, H: ListHandle> ListSync<A, H> {
    pub fn new(api: A, state: H) -> Self {
        Self { api, state }
    }

    /// Fetch the whole collection and replace local state with it.
    /// Returns the number of items loaded.
    pub async fn load(&self) -> SyncResult<usize> {
        match self.api.list_items().await {
            Ok(items) => {
                let count = items.len();
                self.state.write_state(|s| s.replace_items(items));
                log::info!("Loaded {} items", count);
                Ok(count)
            }
            Err(e) => {
                log::error!("Error fetching items: {}", e);
                let message = e.to_string();
                self.state.write_state(|s| s.fail_load(message));
                Err(e.into())
            }
        }
    }

    /// Create an unchecked item remotely, then append it locally.
    ///
    /// A failed add is logged only; it does not replace the visible error.
    pub async fn add(&self, label: &str) -> SyncResult<Item> {
        let label = label.trim();
        if label.is_empty() {
            log::warn!("Ignoring empty item label");
            return Err(SyncError::EmptyLabel);
        }

        let id = self.state.write_state(|s| s.issue_id(now_millis()));
        let item = Item::new(id, label);

        if let Err(e) = self.api.create_item(&item).await {
            log::error!("Error creating new item: {}", e);
            return Err(e.into());
        }

        self.state.write_state(|s| s.push(item.clone()));
        log::debug!("Added item {} ({})", item.id, item.label);
        Ok(item)
    }

    /// Delete an item remotely, then drop it locally.
    /// Unknown ids fail without touching the network.
    pub async fn remove(&self, id: &str) -> SyncResult<()> {
        if self.state.read_state(|s| s.find(id).is_none()) {
            return Err(self.fail("Error deleting item", SyncError::NotFound(id.to_string())));
        }

        if let Err(e) = self.api.delete_item(id).await {
            return Err(self.fail("Error deleting item", e.into()));
        }

        self.state.write_state(|s| s.remove(id));
        log::debug!("Removed item {}", id);
        Ok(())
    }

    /// Send the negated checked flag; on success store exactly the value sent.
    /// Returns the new flag.
    pub async fn toggle(&self, id: &str) -> SyncResult<bool> {
        let Some(checked) = self.state.read_state(|s| s.find(id).map(|item| !item.checked)) else {
            return Err(self.fail("Error updating item", SyncError::NotFound(id.to_string())));
        };

        if let Err(e) = self.api.set_checked(id, checked).await {
            return Err(self.fail("Error updating item", e.into()));
        }

        self.state.write_state(|s| s.set_checked(id, checked));
        log::debug!("Item {} checked={}", id, checked);
        Ok(checked)
    }

    /// Hide the current error message
    pub fn dismiss_error(&self) {
        self.state.write_state(|s| s.clear_error());
    }

    /// Log and surface an error as the visible message
    fn fail(&self, context: &str, err: SyncError) -> SyncError {
        log::error!("{}: {}", context, err);
        let message = err.to_string();
        self.state.write_state(|s| s.record_error(message));
        err
    }
}
