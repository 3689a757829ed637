//! Auth context for the UI. The provider hydrates the cached profile once on
//! mount and exposes it as a signal. The context is also the session cache the
//! auth flows write through, so local storage and the signal never disagree.

use super::{
    client::AuthClient,
    session::{SessionCache, StoredSession},
    types::UserProfile,
};
use crate::app_lib::{
    ApiClient, Navigator,
    api::FetchTransport,
    config::AppConfig,
    navigation::RouterNavigator,
    storage::BrowserStore,
};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[derive(Clone, Copy)]
/// Profile mirror shared through Leptos.
pub struct AuthContext {
    pub profile: RwSignal<Option<UserProfile>>,
    pub is_signed_in: Signal<bool>,
}

impl AuthContext {
    fn new(profile: RwSignal<Option<UserProfile>>) -> Self {
        let is_signed_in = Signal::derive(move || profile.with(Option::is_some));
        Self {
            profile,
            is_signed_in,
        }
    }
}

impl SessionCache for AuthContext {
    fn read(&self) -> Option<UserProfile> {
        self.profile.get_untracked()
    }

    fn write(&self, profile: &UserProfile) {
        browser_session().write(profile);
        self.profile.set(Some(profile.clone()));
    }

    fn clear(&self) {
        browser_session().clear();
        self.profile.set(None);
    }
}

/// Provides auth context and hydrates it from local storage.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(RwSignal::new(browser_session().read()));
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(RwSignal::new(None)))
}

/// Configuration provided by `App`, or freshly loaded outside of it.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::load)
}

/// Auth flows bound to `fetch`, the auth context and the router.
pub fn use_auth_client() -> AuthClient<FetchTransport, AuthContext, impl Navigator + Clone + 'static>
{
    AuthClient::new(
        ApiClient::from_config(&use_config()),
        use_auth(),
        RouterNavigator::new(use_navigate()),
    )
}

fn browser_session() -> StoredSession<BrowserStore> {
    StoredSession::new(BrowserStore)
}
