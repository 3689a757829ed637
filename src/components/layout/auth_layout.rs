use crate::app_lib::paths;
use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

/// Centered single column used by the login, register and callback pages.
#[component]
pub fn AuthLayout() -> impl IntoView {
    view! {
        <div class="flex min-h-screen items-center justify-center bg-white dark:bg-gray-900">
            <div class="w-full max-w-md p-8">
                <div class="mb-8 text-center">
                    <h1 class="text-2xl font-bold">
                        <A href=paths::HOME>"Basic App"</A>
                    </h1>
                </div>
                <Outlet />
            </div>
        </div>
    }
}
