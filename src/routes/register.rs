use crate::components::forms::RegisterForm;
use leptos::prelude::*;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! { <RegisterForm /> }
}
