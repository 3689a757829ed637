use super::{bind_field, submit_error};
use crate::app_lib::{config::AppConfig, navigation::redirect_full_page, paths};
use crate::components::{Alert, AlertKind, Button, ButtonVariant, FormField};
use crate::features::auth::{
    client::{LOGIN_FAILED, settle_outcome},
    form::{FormState, SubmitBlocked},
    schemas::{LoginField, LoginSchema},
    state::{use_auth_client, use_config},
    types::Credentials,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use tracing::debug;

#[component]
pub fn LoginForm() -> impl IntoView {
    let config: AppConfig = use_config();
    let client = use_auth_client();
    let form = RwSignal::new(FormState::<LoginSchema>::new());

    let login_action = Action::new_local(move |credentials: &Credentials| {
        let client = client.clone();
        let credentials = credentials.clone();
        async move { client.login(&credentials).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            form.update(|state| state.settle(settle_outcome(&result, LOGIN_FAILED)));
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        match form.try_update(FormState::begin_submit) {
            Some(Ok(credentials)) => {
                login_action.dispatch(credentials);
            }
            Some(Err(SubmitBlocked::Invalid(errors))) => {
                let fields: Vec<_> = errors.fields().collect();
                debug!(?fields, "login form is invalid");
            }
            _ => {}
        }
    };

    let submitting = Signal::derive(move || form.with(FormState::is_submitting));
    let submit_disabled = Signal::derive(move || !form.with(FormState::submit_enabled));
    let error = submit_error(form);
    let email = bind_field(form, LoginField::Email);
    let password = bind_field(form, LoginField::Password);
    let google_url = config.google_login_url();

    view! {
        <div class="space-y-6">
            <div class="space-y-1 text-center">
                <h2 class="text-xl font-semibold text-gray-900 dark:text-white">"Log in"</h2>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Enter your email and password to continue"
                </p>
            </div>

            <form class="space-y-4" on:submit=on_submit novalidate>
                <FormField
                    id=LoginField::Email.name()
                    label="Email"
                    input_type="email"
                    placeholder="name@example.com"
                    autocomplete="email"
                    value=email.value
                    error=email.error
                    on_input=email.on_input
                    on_blur=email.on_blur
                />
                <FormField
                    id=LoginField::Password.name()
                    label="Password"
                    input_type="password"
                    autocomplete="current-password"
                    value=password.value
                    error=password.error
                    on_input=password.on_input
                    on_blur=password.on_blur
                />
                {move || {
                    error
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}
                <Button button_type="submit" disabled=submit_disabled>
                    {move || if submitting.get() { "Logging in..." } else { "Log in" }}
                </Button>
            </form>

            <div class="relative text-center text-xs uppercase text-gray-500 dark:text-gray-400">
                <span>"Or continue with"</span>
            </div>

            <Button
                variant=ButtonVariant::Outline
                on_click=Callback::new(move |()| redirect_full_page(&google_url))
            >
                "Login with Google"
            </Button>

            <p class="text-center text-sm text-gray-600 dark:text-gray-400">
                "Don't have an account? "
                <A href=paths::REGISTER {..} class="font-medium text-blue-600 hover:underline">
                    "Sign up"
                </A>
            </p>
        </div>
    }
}
