mod callback;
mod dashboard;
mod login;
mod not_found;
mod profile;
mod register;

pub(crate) use callback::CallbackPage;
pub(crate) use dashboard::DashboardPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use profile::ProfilePage;
pub(crate) use register::RegisterPage;

use crate::components::layout::{AuthLayout, DashboardLayout};
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <ParentRoute path=path!("/auth") view=AuthLayout>
                <Route path=path!("login") view=LoginPage />
                <Route path=path!("register") view=RegisterPage />
                <Route path=path!("callback") view=CallbackPage />
            </ParentRoute>
            <ParentRoute path=path!("") view=DashboardLayout>
                <Route path=path!("") view=DashboardPage />
                <Route path=path!("profile") view=ProfilePage />
            </ParentRoute>
        </Routes>
    }
}
