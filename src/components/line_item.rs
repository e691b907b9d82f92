//! Line Item Component
//!
//! One row of the list: checkbox, label, delete button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Item;

#[component]
pub fn LineItem(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let Item { id, label, checked } = item;
    let check_id = id.clone();
    let label_id = id.clone();
    let delete_label = format!("Delete {}", label);

    view! {
        <li class=if checked { "item checked" } else { "item" }>
            <input
                type="checkbox"
                prop:checked=checked
                on:change=move |_| ctx.toggle(check_id.clone())
            />
            <label on:dblclick=move |_| ctx.toggle(label_id.clone())>{label}</label>
            <button
                class="delete-btn"
                aria-label=delete_label
                on:click=move |_| ctx.remove(id.clone())
            >
                "×"
            </button>
        </li>
    }
}
