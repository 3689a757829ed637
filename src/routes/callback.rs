//! Landing page for the OAuth redirect. It renders a short progress message
//! and replaces itself with the dashboard or the login page.

use crate::components::Spinner;
use crate::features::auth::callback::{CallbackQuery, resolve_callback};
use leptos::prelude::*;
use leptos_router::{
    NavigateOptions,
    hooks::{use_location, use_navigate},
};

#[component]
pub fn CallbackPage() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let query = CallbackQuery::parse(&location.search.get());
        let target = resolve_callback(&query);
        navigate(
            &target,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! {
        <div class="flex flex-col items-center gap-4 py-8 text-center">
            <Spinner />
            <p class="text-sm text-gray-600 dark:text-gray-400">
                "Completing authentication..."
            </p>
        </div>
    }
}
