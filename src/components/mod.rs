//! Shared UI components exported for routes.

pub(crate) mod forms;
pub(crate) mod layout;
mod theme_toggle;
pub(crate) mod ui;

pub(crate) use theme_toggle::{ThemeProvider, ThemeToggle};
pub(crate) use ui::{Alert, AlertKind, Button, ButtonVariant, FormField, Spinner};
