use leptos::prelude::*;

/// Search box; the query filters the visible list as you type
#[component]
pub fn SearchItem(
    search: ReadSignal<String>,
    set_search: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <form class="search-form" on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
            <label for="search">"Search"</label>
            <input
                id="search"
                type="text"
                role="searchbox"
                placeholder="Search Items"
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />
        </form>
    }
}
