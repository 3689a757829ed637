//! Shared frontend utilities: configuration, the authenticated API client,
//! errors, key/value storage, navigation, theme and build metadata.
//!
//! ## Authentication model
//!
//! The backend issues an `HttpOnly` session cookie on login (password or
//! Google OAuth). The frontend never sees the token: every API call is sent
//! with `credentials: include` and the browser attaches the cookie. The only
//! identity data kept client-side is a profile summary mirrored into local
//! storage for display, which is cleared on logout even if the backend call
//! fails.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must avoid logging
//! passwords or request bodies.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod navigation;
pub(crate) mod storage;
#[cfg(target_arch = "wasm32")]
pub(crate) mod telemetry;
#[cfg(test)]
pub(crate) mod test_support;
pub(crate) mod theme;

pub(crate) use api::{ApiClient, Transport};
pub(crate) use errors::AppError;
pub(crate) use navigation::{Navigator, paths};
pub(crate) use storage::KeyValueStore;
