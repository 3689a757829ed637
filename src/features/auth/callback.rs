//! OAuth return handling. The backend redirects the browser to
//! `/auth/callback?success=true` after setting the session cookie, or to
//! `/auth/callback?error=<message>` when the provider refused.

use crate::app_lib::{AppError, paths};
use tracing::{error, info, warn};
use url::form_urlencoded;

pub const INCOMPLETE_AUTH: &str = "Authentication was not completed";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackQuery {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl CallbackQuery {
    /// Parses a raw query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "success" if parsed.success.is_none() => parsed.success = Some(value.into_owned()),
                "error" if parsed.error.is_none() => parsed.error = Some(value.into_owned()),
                _ => {}
            }
        }
        parsed
    }

    /// Provider or backend failure reported on the callback, if any.
    pub fn failure(&self) -> Option<AppError> {
        self.error
            .as_ref()
            .map(|message| AppError::AuthCallback(message.clone()))
    }
}

/// Decides where the callback page sends the user. An `error` wins over
/// `success`; a visit with neither is treated as an unfinished flow.
pub fn resolve_callback(query: &CallbackQuery) -> String {
    if let Some(AppError::AuthCallback(message)) = query.failure() {
        error!(error = %message, "OAuth callback reported an error");
        return login_with_error(&message);
    }

    if query.success.as_deref() == Some("true") {
        info!("OAuth login completed");
        return paths::HOME.to_string();
    }

    warn!("OAuth callback without success flag");
    login_with_error(INCOMPLETE_AUTH)
}

/// Login page URL carrying an error message in its query string.
///
/// The message is `application/x-www-form-urlencoded`, so spaces become `+`.
/// Readers decode both `+` and `%20` as a space, which keeps links built with
/// `encodeURIComponent` by other services working.
pub fn login_with_error(message: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("error", message)
        .finish();
    format!("{}?{query}", paths::LOGIN)
}

/// Reads the `error` parameter the login page shows above the form.
pub fn login_error_from_query(query: &str) -> Option<String> {
    CallbackQuery::parse(query)
        .error
        .filter(|message| !message.trim().is_empty())
}
