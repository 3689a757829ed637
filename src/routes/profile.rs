//! Cached profile view and the sign-out control.

use crate::components::{Alert, AlertKind};
use crate::features::auth::state::{use_auth, use_auth_client};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let client = use_auth_client();
    let signing_out = RwSignal::new(false);

    let on_sign_out = move |_| {
        if signing_out.get_untracked() {
            return;
        }
        signing_out.set(true);
        let client = client.clone();
        spawn_local(async move {
            client.logout().await;
            signing_out.set(false);
        });
    };

    view! {
        <div class="max-w-lg space-y-6">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Profile"</h1>
            {move || match auth.profile.get() {
                Some(user) => {
                    view! {
                        <dl class="divide-y divide-gray-100 rounded-lg border border-gray-200 dark:divide-gray-800 dark:border-gray-700">
                            <ProfileRow label="Username" value=user.username />
                            <ProfileRow
                                label="Display name"
                                value=user.display_name.unwrap_or_else(|| "-".to_string())
                            />
                            <ProfileRow
                                label="Email"
                                value=user.email.unwrap_or_else(|| "-".to_string())
                            />
                        </dl>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <Alert
                            kind=AlertKind::Info
                            message="No profile cached in this browser.".to_string()
                        />
                    }
                        .into_any()
                }
            }}
            <button
                type="button"
                class="inline-flex items-center gap-2 rounded-lg border border-gray-300 bg-white px-5 py-2.5 text-sm font-medium text-gray-900 hover:bg-gray-100 disabled:opacity-70 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-200 dark:hover:bg-gray-700"
                disabled=move || signing_out.get()
                on:click=on_sign_out
            >
                <span class="material-symbols-outlined text-base">"logout"</span>
                "Sign out"
            </button>
        </div>
    }
}

#[component]
fn ProfileRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex justify-between px-4 py-3 text-sm">
            <dt class="font-medium text-gray-500 dark:text-gray-400">{label}</dt>
            <dd class="text-gray-900 dark:text-white">{value}</dd>
        </div>
    }
}
