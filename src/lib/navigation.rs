//! Route paths and the navigation seam used by auth flows.

pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/auth/login";
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub const PROFILE: &str = "/profile";
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub const REGISTER: &str = "/auth/register";
}

/// Client-side navigation to an in-app path (optionally with a query string).
pub trait Navigator {
    fn navigate(&self, path: &str);
}

#[cfg(target_arch = "wasm32")]
pub use router::RouterNavigator;

#[cfg(target_arch = "wasm32")]
mod router {
    use super::Navigator;
    use leptos_router::NavigateOptions;

    /// Adapts the closure returned by `use_navigate` to [`Navigator`].
    #[derive(Clone)]
    pub struct RouterNavigator<F> {
        navigate: F,
    }

    impl<F> RouterNavigator<F>
    where
        F: Fn(&str, NavigateOptions) + Clone,
    {
        pub fn new(navigate: F) -> Self {
            Self { navigate }
        }
    }

    impl<F> Navigator for RouterNavigator<F>
    where
        F: Fn(&str, NavigateOptions) + Clone,
    {
        fn navigate(&self, path: &str) {
            (self.navigate)(path, NavigateOptions::default());
        }
    }
}

/// Leaves the single-page app, e.g. for the OAuth provider redirect.
#[cfg(target_arch = "wasm32")]
pub fn redirect_full_page(url: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(url).is_err() {
            tracing::error!(url, "full-page redirect failed");
        }
    }
}
