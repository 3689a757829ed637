//! Layout components shared across routes.

mod auth_layout;
mod dashboard_layout;
mod header;
mod main_content;
mod sidebar;

pub(crate) use auth_layout::AuthLayout;
pub(crate) use dashboard_layout::DashboardLayout;
pub(crate) use header::Header;
pub(crate) use main_content::MainContent;
pub(crate) use sidebar::Sidebar;
