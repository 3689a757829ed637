//! String key/value persistence used for the cached user profile and the theme
//! preference. In the browser this is `window.localStorage`; storage that is
//! missing or blocked (private mode, sandboxed iframes) degrades to no-ops.

use super::errors::AppError;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str);
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::KeyValueStore;
    use crate::app_lib::errors::AppError;

    /// `window.localStorage`, looked up on every call so the handle stays `Send`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserStore;

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok())
            .flatten()
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Option<String> {
            local_storage()?.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
            let storage = local_storage()
                .ok_or_else(|| AppError::Config("Local storage is unavailable.".to_string()))?;
            storage
                .set_item(key, value)
                .map_err(|_| AppError::Config(format!("Failed to persist `{key}`.")))
        }

        fn remove(&self, key: &str) {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
}
