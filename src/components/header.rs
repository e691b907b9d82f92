use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <header>
            <h1>{title}</h1>
        </header>
    }
}
