//! Landing page. Greets the cached user when one is known.

use crate::features::auth::state::use_auth;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.profile.with(|profile| match profile {
            Some(user) => format!(
                "Welcome back, {}",
                user.display_name.as_deref().unwrap_or(&user.username)
            ),
            None => "Welcome".to_string(),
        })
    };

    view! {
        <div class="space-y-2">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Dashboard"</h1>
            <p class="text-gray-600 dark:text-gray-400">{greeting}</p>
        </div>
    }
}
