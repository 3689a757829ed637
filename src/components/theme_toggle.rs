//! Theme context and the header control that flips it. The preference is
//! restored from local storage on start and saved once the user changes it;
//! until then the system color scheme decides.

use crate::app_lib::{
    storage::BrowserStore,
    theme::{Styles, Theme},
};
use leptos::prelude::*;
use tracing::debug;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme = RwSignal::new(Theme::load(&BrowserStore));
    provide_context(ThemeContext { theme });

    Effect::new(move |previous: Option<()>| {
        let current = theme.get();
        current.apply();
        if previous.is_some() {
            current.save(&BrowserStore);
        }
        debug!(theme = current.as_str(), "theme applied");
    });

    view! { {children()} }
}

fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        theme: RwSignal::new(Theme::default()),
    })
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let context = use_theme();
    let label = move || match context.theme.get() {
        Theme::Dark => "Switch to light theme",
        Theme::Light => "Switch to dark theme",
    };

    view! {
        <button
            type="button"
            class=Styles::ICON_BUTTON
            aria-label=label
            title=label
            on:click=move |_| context.toggle()
        >
            <span class="material-symbols-outlined text-xl">
                {move || context.theme.get().toggle_icon()}
            </span>
        </button>
    }
}
