//! Request and response types for the auth endpoints. Login and registration
//! payloads carry passwords, so they must never be logged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Profile summary mirrored into local storage for display only. Fields the
/// UI does not read are kept in `extra` so the cached copy matches what the
/// server sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Successful login/register body. Tokens travel as cookies, never here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: Option<UserProfile>,
}

impl AuthResponse {
    /// Reads the `user` object of a 2xx body. The session cookie is already
    /// set by then, so a missing or unusable profile yields no user instead
    /// of an error.
    pub fn from_body(body: &Value) -> Self {
        let user = match body.get("user") {
            None | Some(Value::Null) => None,
            Some(raw) => match serde_json::from_value::<UserProfile>(raw.clone()) {
                Ok(profile) => Some(profile),
                Err(err) => {
                    warn!(error = %err, "ignoring unusable user profile in auth response");
                    None
                }
            },
        };
        Self { user }
    }
}
