//! Add Item Form Component
//!
//! Text input that creates a new item on submit.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn AddItem() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_item, set_new_item) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let label = new_item.get();
        if label.trim().is_empty() { return; }
        ctx.add(label);
        set_new_item.set(String::new());
    };

    view! {
        <form class="add-form" on:submit=on_submit>
            <label for="addItem">"Add Item"</label>
            <input
                id="addItem"
                type="text"
                placeholder="Add Item"
                autofocus=true
                required=true
                prop:value=move || new_item.get()
                on:input=move |ev| set_new_item.set(event_target_value(&ev))
            />
            <button type="submit" aria-label="Add Item">"+"</button>
        </form>
    }
}
