use super::{bind_field, submit_error};
use crate::app_lib::paths;
use crate::components::{Alert, AlertKind, Button, FormField};
use crate::features::auth::{
    client::{REGISTER_FAILED, settle_outcome},
    form::{FormState, SubmitBlocked},
    schemas::{RegisterField, RegisterSchema},
    state::use_auth_client,
    types::Registration,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use tracing::debug;

#[component]
pub fn RegisterForm() -> impl IntoView {
    let client = use_auth_client();
    let form = RwSignal::new(FormState::<RegisterSchema>::new());

    let register_action = Action::new_local(move |registration: &Registration| {
        let client = client.clone();
        let registration = registration.clone();
        async move { client.register(&registration).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            form.update(|state| state.settle(settle_outcome(&result, REGISTER_FAILED)));
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        match form.try_update(FormState::begin_submit) {
            Some(Ok(registration)) => {
                register_action.dispatch(registration);
            }
            Some(Err(SubmitBlocked::Invalid(errors))) => {
                let fields: Vec<_> = errors.fields().collect();
                debug!(?fields, "registration form is invalid");
            }
            _ => {}
        }
    };

    let submitting = Signal::derive(move || form.with(FormState::is_submitting));
    let submit_disabled = Signal::derive(move || !form.with(FormState::submit_enabled));
    let error = submit_error(form);
    let username = bind_field(form, RegisterField::Username);
    let email = bind_field(form, RegisterField::Email);
    let display_name = bind_field(form, RegisterField::DisplayName);
    let password = bind_field(form, RegisterField::Password);

    view! {
        <div class="space-y-6">
            <div class="space-y-1 text-center">
                <h2 class="text-xl font-semibold text-gray-900 dark:text-white">
                    "Create an account"
                </h2>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Pick a username and password to get started"
                </p>
            </div>

            <form class="space-y-4" on:submit=on_submit novalidate>
                <FormField
                    id=RegisterField::Username.name()
                    label="Username"
                    placeholder="alice_01"
                    autocomplete="username"
                    value=username.value
                    error=username.error
                    on_input=username.on_input
                    on_blur=username.on_blur
                />
                <FormField
                    id=RegisterField::Email.name()
                    label="Email (optional)"
                    input_type="email"
                    placeholder="name@example.com"
                    autocomplete="email"
                    value=email.value
                    error=email.error
                    on_input=email.on_input
                    on_blur=email.on_blur
                />
                <FormField
                    id=RegisterField::DisplayName.name()
                    label="Display name (optional)"
                    autocomplete="name"
                    value=display_name.value
                    error=display_name.error
                    on_input=display_name.on_input
                    on_blur=display_name.on_blur
                />
                <FormField
                    id=RegisterField::Password.name()
                    label="Password"
                    input_type="password"
                    autocomplete="new-password"
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
                    {move || if submitting.get() { "Creating account..." } else { "Sign up" }}
                </Button>
            </form>

            <p class="text-center text-sm text-gray-600 dark:text-gray-400">
                "Already have an account? "
                <A href=paths::LOGIN {..} class="font-medium text-blue-600 hover:underline">
                    "Log in"
                </A>
            </p>
        </div>
    }
}
