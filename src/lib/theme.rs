//! Light/dark theme preference plus the shared Tailwind class constants used by
//! the layout chrome.

use super::storage::KeyValueStore;
use tracing::warn;

/// Local storage key holding the theme preference.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Material symbol shown on the toggle: the sun leads out of dark mode.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "light_mode",
            Theme::Light => "dark_mode",
        }
    }

    /// Reads the stored preference. Without a valid one the system color
    /// scheme decides, and light is used when that is unknown.
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self::resolve(store.get(THEME_KEY).as_deref(), system_prefers_dark())
    }

    fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.and_then(Self::parse) {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    pub fn save(self, store: &impl KeyValueStore) {
        if let Err(err) = store.set(THEME_KEY, self.as_str()) {
            warn!(error = %err, "failed to persist theme preference");
        }
    }

    /// Toggles the `dark` class on `<html>` for Tailwind's class strategy.
    #[cfg(target_arch = "wasm32")]
    pub fn apply(self) {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let result = match self {
            Theme::Dark => classes.add_1("dark"),
            Theme::Light => classes.remove_1("dark"),
        };
        if result.is_err() {
            warn!(theme = self.as_str(), "failed to apply theme class");
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

#[cfg(not(target_arch = "wasm32"))]
fn system_prefers_dark() -> bool {
    false
}

pub struct Styles;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl Styles {
    /// Inline header navigation link.
    pub const HEADER_LINK: &'static str =
        "text-gray-700 hover:underline dark:text-gray-300 dark:hover:text-white";

    /// Sidebar link base; active/inactive variants are toggled with `class:`.
    pub const SIDEBAR_LINK: &'static str =
        "flex items-center px-4 py-2 rounded-md text-sm font-medium transition-colors";

    /// Outlined square button used for icon-only controls.
    pub const ICON_BUTTON: &'static str = "inline-flex items-center justify-center h-9 w-9 rounded-md border border-gray-200 text-gray-700 hover:bg-gray-100 dark:border-gray-700 dark:text-gray-200 dark:hover:bg-gray-800 transition-colors";

    /// Text input; the `aria-invalid` variant turns the border red.
    pub const INPUT: &'static str = "w-full rounded-lg border border-gray-300 bg-gray-50 px-3 py-2.5 text-sm text-gray-900 focus:border-blue-500 focus:ring-blue-500 aria-[invalid=true]:border-red-500 dark:border-gray-600 dark:bg-gray-700 dark:text-white dark:placeholder-gray-400";
}
