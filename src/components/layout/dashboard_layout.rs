use crate::components::layout::{Header, MainContent, Sidebar};
use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Header on top, sidebar and page body side by side underneath.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    view! {
        <div class="flex h-screen flex-col">
            <Header />
            <div class="flex flex-1 overflow-hidden">
                <Sidebar />
                <MainContent>
                    <Outlet />
                </MainContent>
            </div>
        </div>
    }
}
