//! Login and registration forms. Both drive a [`FormState`] held in a signal;
//! the helpers here bind one schema field to a [`FormField`](crate::components::FormField).

mod login_form;
mod register_form;

pub(crate) use login_form::LoginForm;
pub(crate) use register_form::RegisterForm;

use crate::features::auth::{form::FormState, schemas::Schema};
use leptos::prelude::*;

/// Reactive accessors and handlers for one field of a form signal.
pub(crate) struct FieldBinding {
    pub value: Signal<String>,
    pub error: Signal<Option<String>>,
    pub on_input: Callback<String>,
    pub on_blur: Callback<()>,
}

pub(crate) fn bind_field<S>(form: RwSignal<FormState<S>>, field: S::Field) -> FieldBinding
where
    S: Schema + 'static,
{
    FieldBinding {
        value: Signal::derive(move || form.with(|state| state.value(field).to_string())),
        error: Signal::derive(move || {
            form.with(|state| state.visible_error(field).map(str::to_string))
        }),
        on_input: Callback::new(move |value: String| {
            form.update(|state| state.set_value(field, value));
        }),
        on_blur: Callback::new(move |()| form.update(|state| state.blur(field))),
    }
}

/// Form-level error banner, shown after a failed submission.
pub(crate) fn submit_error<S>(form: RwSignal<FormState<S>>) -> Signal<Option<String>>
where
    S: Schema + 'static,
{
    Signal::derive(move || form.with(|state| state.error().map(str::to_string)))
}
