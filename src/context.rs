//! Application Context
//!
//! Shared handles provided via the Leptos Context API. Every user action
//! spawns its own synchronizer call on the UI event loop.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::RestItemsApi;
use crate::config::AppConfig;
use crate::store::AppStore;
use crate::sync::{ListHandle, ListSync};

pub type GrocerySync = ListSync<RestItemsApi, AppStore>;

/// App-wide state and actions
#[derive(Clone, Copy)]
pub struct AppContext {
    /// List state - read/write
    pub store: AppStore,
    /// One HTTP client for the whole session
    api: StoredValue<RestItemsApi, LocalStorage>,
    config: AppConfig,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        let api = StoredValue::new_local(RestItemsApi::new(config.api_url));
        Self { store, api, config }
    }

    fn synchronizer(&self) -> GrocerySync {
        ListSync::new(self.api.get_value(), self.store)
    }

    /// Initial load, after the configured delay
    pub fn load(&self) {
        let sync = self.synchronizer();
        let delay = self.config.load_delay_ms;
        log::info!("Loading items from {}", self.config.api_url);
        spawn_local(async move {
            if delay > 0 {
                TimeoutFuture::new(delay).await;
            }
            let _ = sync.load().await;
        });
    }

    pub fn add(&self, label: String) {
        let sync = self.synchronizer();
        spawn_local(async move {
            let _ = sync.add(&label).await;
        });
    }

    pub fn remove(&self, id: String) {
        let sync = self.synchronizer();
        spawn_local(async move {
            let _ = sync.remove(&id).await;
        });
    }

    pub fn toggle(&self, id: String) {
        let sync = self.synchronizer();
        spawn_local(async move {
            let _ = sync.toggle(&id).await;
        });
    }

    pub fn dismiss_error(&self) {
        self.store.write_state(|s| s.clear_error());
    }
}
