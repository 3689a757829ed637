//! Auth feature module: validation schemas, the form controller, the session
//! cache and the login/register/logout/OAuth-callback flows. It keeps
//! authentication logic out of the UI. Payloads carry passwords and must never
//! be logged.
//!
//! Flow Overview: a form validates locally, enters the submitting state and
//! calls [`client::AuthClient`]; on success the backend sets an `HttpOnly`
//! cookie, the returned profile is cached and the router moves home. Google
//! login leaves the app and returns through [`callback::resolve_callback`].

pub(crate) mod callback;
pub(crate) mod client;
pub(crate) mod form;
pub(crate) mod schemas;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;
