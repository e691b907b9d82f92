//! Grocery List App
//!
//! Root component: wires the store and context, loads the list once on mount.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItem, Content, Footer, Header, SearchItem};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::ListState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(ListState::new());
    let ctx = AppContext::new(store, AppConfig::from_build_env());
    let (search, set_search) = signal(String::new());

    // Provide state to all children
    provide_context(store);
    provide_context(ctx);

    // Load once on mount; nothing tracked, so this never re-runs
    Effect::new(move |_| ctx.load());

    view! {
        <div class="app">
            <Header title="Grocery List" />
            <AddItem />
            <SearchItem search=search set_search=set_search />
            <Content search=search />
            <Footer />
        </div>
    }
}
