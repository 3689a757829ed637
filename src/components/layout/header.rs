//! Top bar: brand link, primary navigation, a login link while signed out
//! and the theme control.

use crate::app_lib::{paths, theme::Styles};
use crate::components::ThemeToggle;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();

    view! {
        <header class="border-b border-gray-200 bg-white dark:border-gray-800 dark:bg-gray-900">
            <div class="flex h-16 items-center gap-4 px-4">
                <A href=paths::HOME {..} class="text-lg font-semibold">
                    "Basic App"
                </A>
                <nav class="ml-8 flex flex-1 gap-4">
                    <A href=paths::HOME {..} class=Styles::HEADER_LINK>
                        "Dashboard"
                    </A>
                    <A href=paths::PROFILE {..} class=Styles::HEADER_LINK>
                        "Profile"
                    </A>
                </nav>
                <Show when=move || !auth.is_signed_in.get()>
                    <A href=paths::LOGIN {..} class=Styles::HEADER_LINK>
                        "Log in"
                    </A>
                </Show>
                <ThemeToggle />
            </div>
        </header>
    }
}
