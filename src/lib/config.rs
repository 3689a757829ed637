//! Application configuration built once at start and passed explicitly to the
//! API client and logging. Values come from defaults, then build-time
//! environment variables, then an optional runtime override read from
//! `window.BASIC_APP_CONFIG` so static deployments can re-point the API
//! without rebuilding. Configuration values are public; do not store secrets
//! here.

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";
/// Abort budget for a single request.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

const GOOGLE_LOGIN_PATH: &str = "/api/auth/login/google";

/// Frontend configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn load() -> Self {
        let mut config = Self::default();

        apply_overrides(
            &mut config,
            Overrides {
                api_base_url: option_env!("BASIC_APP_API_URL").and_then(normalize_value),
                log_level: option_env!("BASIC_APP_LOG_LEVEL").and_then(normalize_value),
            },
        );

        if let Some(runtime) = runtime_config() {
            apply_overrides(&mut config, runtime);
        }

        config
    }

    /// Full-page navigation target that starts the Google OAuth flow.
    pub fn google_login_url(&self) -> String {
        format!(
            "{}{GOOGLE_LOGIN_PATH}",
            self.api_base_url.trim().trim_end_matches('/')
        )
    }
}

#[derive(Default)]
struct Overrides {
    api_base_url: Option<String>,
    log_level: Option<String>,
}

fn apply_overrides(config: &mut AppConfig, overrides: Overrides) {
    if let Some(value) = overrides.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = overrides.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<Overrides> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("BASIC_APP_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(Overrides {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<Overrides> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_value(&value)
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DEFAULT_API_BASE_URL, Overrides, apply_overrides, normalize_value};

    #[test]
    fn defaults_point_at_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout_ms, 10_000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn normalize_value_trims_and_rejects_empty() {
        assert_eq!(normalize_value(""), None);
        assert_eq!(normalize_value("   "), None);
        assert_eq!(
            normalize_value("  https://api.example.com "),
            Some("https://api.example.com".to_string())
        );
    }

    #[test]
    fn apply_overrides_ignores_empty_values() {
        let mut config = AppConfig::default();
        let overrides = Overrides {
            api_base_url: normalize_value("  "),
            log_level: normalize_value(""),
        };

        apply_overrides(&mut config, overrides);

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn apply_overrides_overwrites_when_present() {
        let mut config = AppConfig::default();
        let overrides = Overrides {
            api_base_url: normalize_value("https://api.override"),
            log_level: normalize_value("debug"),
        };

        apply_overrides(&mut config, overrides);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn google_login_url_joins_without_double_slash() {
        let config = AppConfig {
            api_base_url: "https://api.example.com/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(
            config.google_login_url(),
            "https://api.example.com/api/auth/login/google"
        );
    }
}
