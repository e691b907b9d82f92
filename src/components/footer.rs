use leptos::prelude::*;

use crate::store::{use_app_store, ListStateStoreFields};

/// "1 List item" / "3 List items"
pub fn item_count_label(count: usize) -> String {
    format!("{} List {}", count, if count == 1 { "item" } else { "items" })
}

#[component]
pub fn Footer() -> impl IntoView {
    let store = use_app_store();
    let count = move || store.items().with(|items| items.len());

    view! {
        <footer>
            <p>{move || item_count_label(count())}</p>
        </footer>
    }
}
