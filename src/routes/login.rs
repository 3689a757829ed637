use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, forms::LoginForm};
use crate::features::auth::callback::login_error_from_query;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Login form, with the OAuth failure passed back through `?error=`.
#[component]
pub fn LoginPage() -> impl IntoView {
    let location = use_location();
    let callback_error = move || {
        login_error_from_query(&location.search.get())
            .map(|message| AppError::AuthCallback(message).to_string())
    };

    view! {
        <div class="space-y-4">
            {move || {
                callback_error()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
            }}
            <LoginForm />
        </div>
    }
}
