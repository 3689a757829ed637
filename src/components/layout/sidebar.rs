//! Side navigation mirroring the header links, with the active route
//! highlighted and build information in the footer.

use crate::app_lib::{build_info, paths, theme::Styles};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    view! {
        <aside class="flex w-64 flex-shrink-0 flex-col border-r border-gray-200 bg-white p-4 dark:border-gray-800 dark:bg-gray-900">
            <nav class="flex-1 space-y-2">
                <SidebarLink
                    target=paths::HOME
                    icon="dashboard"
                    label="Dashboard"
                    active=Signal::derive(move || pathname() == paths::HOME)
                />
                <SidebarLink
                    target=paths::PROFILE
                    icon="person"
                    label="Profile"
                    active=Signal::derive(move || pathname().starts_with(paths::PROFILE))
                />
            </nav>

            <div class="border-t border-gray-100 pt-4 dark:border-gray-800">
                <p class="text-center font-mono text-[10px] uppercase tracking-tighter text-gray-400">
                    {build_info::label()}
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    active: Signal<bool>,
) -> impl IntoView {
    view! {
        <A
            href=target
            {..}
            attr:class=Styles::SIDEBAR_LINK
            class:bg-blue-50=move || active.get()
            class:text-blue-600=move || active.get()
            class:dark:bg-blue-900=move || active.get()
            class:text-gray-700=move || !active.get()
            class:hover:bg-gray-100=move || !active.get()
            class:dark:text-gray-300=move || !active.get()
            class:dark:hover:bg-gray-800=move || !active.get()
        >
            <span class="material-symbols-outlined mr-3 text-xl">{icon}</span>
            {label}
        </A>
    }
}
