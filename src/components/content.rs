//! Content Component
//!
//! Loading indicator, error banner and the filtered list.

use leptos::prelude::*;

use crate::components::LineItem;
use crate::context::AppContext;
use crate::store::{use_app_store, ListStateStoreFields, LoadStatus};
use crate::sync::filter_items;

#[component]
pub fn Content(search: ReadSignal<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        let query = search.get();
        store.items().with(|items| filter_items(items, &query))
    });
    let status = move || store.status().get();

    view! {
        <main>
            <Show when=move || status() == LoadStatus::Loading>
                <p class="loading">"Loading..."</p>
            </Show>

            {move || store.error().get().map(|message| view! {
                <p class="error">
                    {message}
                    <button class="dismiss-btn" on:click=move |_| ctx.dismiss_error()>"×"</button>
                </p>
            })}

            // A failed load leaves nothing trustworthy to show
            <Show when=move || status() == LoadStatus::Ready>
                <Show
                    when=move || !visible.with(|items| items.is_empty())
                    fallback=|| view! { <p class="empty">"Your list is empty."</p> }
                >
                    <ul>
                        <For
                            each=move || visible.get()
                            key=|item| (item.id.clone(), item.label.clone(), item.checked)
                            children=move |item| view! { <LineItem item=item /> }
                        />
                    </ul>
                </Show>
            </Show>
        </main>
    }
}
