//! Fallback page for unknown routes.

use crate::app_lib::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-[50vh] flex-col items-center justify-center px-4 text-center">
            <h1 class="select-none text-9xl font-black text-gray-100 dark:text-gray-800">"404"</h1>
            <p class="text-2xl font-bold text-gray-900 dark:text-white">"Page not found"</p>
            <p class="mt-4 max-w-sm text-gray-500 dark:text-gray-400">
                "The page you requested does not exist."
            </p>
            <A
                href=paths::HOME
                {..}
                class="mt-6 inline-flex items-center rounded-lg bg-blue-700 px-5 py-2.5 text-sm font-medium text-white hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
            >
                <span class="material-symbols-outlined mr-2 text-base">"home"</span>
                "Go Home"
            </A>
        </div>
    }
}
