//! Authenticated JSON client for the Basic App backend. Every request goes out
//! with browser-managed cookies (`credentials: include`) and a JSON content
//! type; the session token itself is never visible to this code.
//!
//! Request options are resolved in three fixed layers:
//!
//! 1. defaults: `GET`, `Content-Type: application/json`, credentials `include`;
//! 2. caller overrides: method, body, headers (caller wins, names compare
//!    case-insensitively) and credentials;
//! 3. forced fields: credentials are set back to `include` no matter what the
//!    caller asked for.
//!
//! The network itself sits behind [`Transport`] so the flows built on top can be
//! exercised without a browser.

use super::{
    config::AppConfig,
    errors::{AppError, REQUEST_FAILED},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

/// Maximum number of error message characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;
const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Mirrors the fetch `credentials` mode.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Credentials {
    #[default]
    Include,
    SameOrigin,
    Omit,
}

/// Caller-supplied request options; every field is optional and layered over
/// the defaults by [`RequestOptions::resolve`].
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    method: Option<Method>,
    headers: Vec<(String, String)>,
    credentials: Option<Credentials>,
    body: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Adds or replaces a header. A later call with the same name wins.
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, name.into(), value.into());
        self
    }

    /// Accepted for parity with fetch options; resolution always forces `Include`.
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Applies defaults, then these overrides, then the forced fields.
    pub fn resolve(self, url: String) -> ApiRequest {
        let mut headers = vec![("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())];
        for (name, value) in self.headers {
            set_header(&mut headers, name, value);
        }

        let mut request = ApiRequest {
            url,
            method: self.method.unwrap_or_default(),
            headers,
            credentials: self.credentials.unwrap_or_default(),
            body: self.body,
        };
        request.credentials = Credentials::Include;
        request
    }
}

fn set_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    if let Some(existing) = headers
        .iter_mut()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
    {
        *existing = (name, value);
    } else {
        headers.push((name, value));
    }
}

/// Fully resolved request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub url: String,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub credentials: Credentials,
    pub body: Option<String>,
}

impl ApiRequest {
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body of a completed exchange, before any interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the body; an empty body is read as JSON `null`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        let body = if self.body.trim().is_empty() {
            "null"
        } else {
            self.body.as_str()
        };
        serde_json::from_str(body)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    }

    /// Decodes the body as loose JSON. Text that is not JSON reads as `null`.
    pub fn json_or_null(&self) -> serde_json::Value {
        self.json().unwrap_or_else(|err| {
            warn!(status = self.status, error = %err, "treating unreadable response body as empty");
            serde_json::Value::Null
        })
    }

    /// Builds the error for a non-2xx response from its JSON `message`, if any.
    fn into_error(self) -> AppError {
        let message = match serde_json::from_str::<serde_json::Value>(&self.body) {
            Ok(value) => value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::trim)
                .filter(|message| !message.is_empty())
                .map(|message| message.chars().take(MAX_ERROR_CHARS).collect())
                .unwrap_or_else(|| format!("HTTP {}", self.status)),
            Err(_) => REQUEST_FAILED.to_string(),
        };
        AppError::Http {
            status: self.status,
            message,
        }
    }
}

/// Network seam. Implementations return `Err` only when no response arrived.
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, AppError>;
}

/// Cookie-authenticated client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

#[cfg(target_arch = "wasm32")]
impl ApiClient<FetchTransport> {
    /// Browser client using the configured base URL and timeout.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config, FetchTransport::new(config.request_timeout_ms))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: &AppConfig, transport: T) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            transport,
        }
    }

    /// Sends a request and returns the raw response whatever its status.
    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<RawResponse, AppError> {
        let request = options.resolve(build_url_with_base(&self.base_url, path));
        debug!(method = request.method.as_str(), url = %request.url, "api request");

        let response = self.transport.send(request).await?;
        debug!(status = response.status, "api response");
        Ok(response)
    }

    // The auth flows only post; the other verbs complete the client surface.

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, AppError> {
        self.send_json(path, Method::Get, None::<&()>).await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, AppError> {
        self.send_json(path, Method::Post, body).await
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, AppError> {
        self.send_json(path, Method::Put, body).await
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, AppError> {
        self.send_json(path, Method::Delete, None::<&()>).await
    }

    /// Like [`post`](Self::post), but hands back a 2xx response undecoded so
    /// the caller decides how strictly to read the body.
    pub async fn post_raw<B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<RawResponse, AppError> {
        self.send_checked(path, Method::Post, body).await
    }

    async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        body: Option<&B>,
    ) -> Result<R, AppError> {
        self.send_checked(path, method, body).await?.json()
    }

    /// Sends a request and turns any non-2xx status into an error.
    async fn send_checked<B: Serialize>(
        &self,
        path: &str,
        method: Method,
        body: Option<&B>,
    ) -> Result<RawResponse, AppError> {
        let mut options = RequestOptions::new().method(method);
        if let Some(body) = body {
            let payload = serde_json::to_string(body).map_err(|err| {
                AppError::Serialization(format!("Failed to encode request: {err}"))
            })?;
            options = options.body(payload);
        }

        let response = self.request(path, options).await?;
        if response.ok() {
            Ok(response)
        } else {
            Err(response.into_error())
        }
    }
}

/// Absolute URLs pass through; anything else is joined to the base URL.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let path = path.trim();
    if path.starts_with("http") {
        return path.to_string();
    }

    let base = base_url.trim().trim_end_matches('/');
    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchTransport;

#[cfg(target_arch = "wasm32")]
mod fetch {
    use super::{ApiRequest, Credentials, Method, RawResponse, Transport};
    use crate::app_lib::errors::AppError;
    use gloo_net::http::{Request, RequestBuilder};
    use gloo_timers::callback::Timeout;
    use web_sys::{AbortController, RequestCredentials};

    /// Browser `fetch` transport with an abort timeout so the UI never hangs.
    #[derive(Clone, Copy, Debug)]
    pub struct FetchTransport {
        timeout_ms: u32,
    }

    impl FetchTransport {
        pub fn new(timeout_ms: u32) -> Self {
            Self { timeout_ms }
        }
    }

    impl Transport for FetchTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, AppError> {
            let controller = AbortController::new().map_err(|_| {
                AppError::Config("Failed to initialize request timeout.".to_string())
            })?;
            let signal = controller.signal();
            let timeout_controller = controller.clone();
            let _timeout = Timeout::new(self.timeout_ms, move || timeout_controller.abort());

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            }
            .credentials(credentials_mode(request.credentials))
            .abort_signal(Some(&signal));

            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            let response = build(builder, request.body)?
                .send()
                .await
                .map_err(map_request_error)?;

            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Ok(RawResponse { status, body })
        }
    }

    fn build(builder: RequestBuilder, body: Option<String>) -> Result<Request, AppError> {
        match body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    }

    fn credentials_mode(credentials: Credentials) -> RequestCredentials {
        match credentials {
            Credentials::Include => RequestCredentials::Include,
            Credentials::SameOrigin => RequestCredentials::SameOrigin,
            Credentials::Omit => RequestCredentials::Omit,
        }
    }

    /// Maps fetch failures into user-facing variants with timeout detection.
    fn map_request_error(err: gloo_net::Error) -> AppError {
        let message = err.to_string();
        let lowered = message.to_lowercase();

        if lowered.contains("timeout") || lowered.contains("abort") {
            AppError::Timeout("Request timed out. Please try again.".to_string())
        } else {
            AppError::Network("Unable to reach the server. Please try again.".to_string())
        }
    }
}
