use leptos::prelude::*;

/// Scrollable page body next to the sidebar.
#[component]
pub fn MainContent(children: Children) -> impl IntoView {
    view! {
        <main class="flex-1 overflow-auto">
            <div class="container mx-auto p-6">{children()}</div>
        </main>
    }
}
