//! Auth flows against the backend: password login, registration and logout.
//! Session cookies are set and cleared by the server; these flows only mirror
//! the returned profile into the session cache and move the router.

use super::{
    session::SessionCache,
    types::{AuthResponse, Credentials, Registration},
};
use crate::app_lib::{ApiClient, AppError, Navigator, Transport, paths};
use tracing::{error, info, warn};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGOUT_PATH: &str = "/api/auth/logout";

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTER_FAILED: &str = "Registration failed";

#[derive(Clone)]
pub struct AuthClient<T, C, N> {
    api: ApiClient<T>,
    cache: C,
    navigator: N,
}

impl<T, C, N> AuthClient<T, C, N>
where
    T: Transport,
    C: SessionCache,
    N: Navigator,
{
    pub fn new(api: ApiClient<T>, cache: C, navigator: N) -> Self {
        Self {
            api,
            cache,
            navigator,
        }
    }

    /// Logs in with email and password. Any 2xx means the server has set the
    /// session cookie: a usable profile is cached and the router moves home.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, AppError> {
        info!("attempting password login");
        let response = self
            .api
            .post_raw(LOGIN_PATH, Some(credentials))
            .await
            .inspect_err(|err| warn!(error = %err, "login failed"))?;

        Ok(self.complete_sign_in(&response.json_or_null()))
    }

    /// Creates an account; success follows the same path as login.
    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, AppError> {
        info!("attempting registration");
        let response = self
            .api
            .post_raw(REGISTER_PATH, Some(registration))
            .await
            .inspect_err(|err| warn!(error = %err, "registration failed"))?;

        Ok(self.complete_sign_in(&response.json_or_null()))
    }

    /// Ends the session on the server, best effort. The cached profile is
    /// removed whether or not the call succeeds, then the router moves to the
    /// login page.
    pub async fn logout(&self) {
        match self
            .api
            .post::<(), serde_json::Value>(LOGOUT_PATH, None)
            .await
        {
            Ok(_) => info!("logged out"),
            Err(err) => error!(error = %err, "logout request failed; clearing local session anyway"),
        }
        self.cache.clear();
        self.navigator.navigate(paths::LOGIN);
    }

    fn complete_sign_in(&self, body: &serde_json::Value) -> AuthResponse {
        let response = AuthResponse::from_body(body);
        if let Some(user) = &response.user {
            self.cache.write(user);
            info!(username = %user.username, "signed in");
        } else {
            info!("signed in without profile data");
        }
        self.navigator.navigate(paths::HOME);
        response
    }
}

/// Maps a flow result to what the form controller settles with.
pub fn settle_outcome<R>(result: &Result<R, AppError>, fallback: &str) -> Result<(), String> {
    match result {
        Ok(_) => Ok(()),
        Err(err) => Err(err.form_message(fallback)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app_lib::{
            api::Method,
            config::AppConfig,
            storage::KeyValueStore,
            test_support::{MemoryStore, RecordingNavigator, StubTransport},
        },
        features::auth::{
            form::{FormState, SubmitBlocked},
            schemas::{LoginField, LoginSchema, RegisterField, RegisterSchema},
            session::{StoredSession, USER_KEY},
        },
    };
    use serde_json::{Value, json};

    struct Harness {
        transport: StubTransport,
        store: MemoryStore,
        navigator: RecordingNavigator,
        client: AuthClient<StubTransport, StoredSession<MemoryStore>, RecordingNavigator>,
    }

    fn harness() -> Harness {
        let transport = StubTransport::new();
        let store = MemoryStore::default();
        let navigator = RecordingNavigator::default();
        let client = AuthClient::new(
            ApiClient::new(&AppConfig::default(), transport.clone()),
            StoredSession::new(store.clone()),
            navigator.clone(),
        );
        Harness {
            transport,
            store,
            navigator,
            client,
        }
    }

    fn filled_login() -> FormState<LoginSchema> {
        let mut form = FormState::new();
        form.set_value(LoginField::Email, "alice@example.com");
        form.set_value(LoginField::Password, "correct horse");
        form
    }

    async fn submit_login(harness: &Harness, form: &mut FormState<LoginSchema>) {
        let credentials = form.begin_submit().unwrap();
        let result = harness.client.login(&credentials).await;
        form.settle(settle_outcome(&result, LOGIN_FAILED));
    }

    #[tokio::test]
    async fn login_success_caches_user_and_navigates_home_once() {
        let harness = harness();
        harness
            .transport
            .respond(200, r#"{"user": {"username": "alice"}}"#);
        let mut form = filled_login();

        submit_login(&harness, &mut form).await;

        let cached: Value =
            serde_json::from_str(&harness.store.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(cached, json!({"username": "alice"}));
        assert_eq!(harness.navigator.visits(), vec!["/".to_string()]);
        assert_eq!(form.error(), None);

        let requests = harness.transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://localhost:4000/api/auth/login");
        assert_eq!(requests[0].method, Method::Post);
        let body: Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"email": "alice@example.com", "password": "correct horse"})
        );
    }

    #[tokio::test]
    async fn login_success_without_user_still_navigates() {
        let harness = harness();
        harness.transport.respond(200, "");
        let mut form = filled_login();

        submit_login(&harness, &mut form).await;

        assert_eq!(harness.store.get(USER_KEY), None);
        assert_eq!(harness.navigator.visits(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn login_success_with_unusable_user_still_signs_in() {
        let harness = harness();
        harness
            .transport
            .respond(200, r#"{"user": {"id": 7, "email": "a@b.co"}}"#);
        let mut form = filled_login();

        submit_login(&harness, &mut form).await;

        assert_eq!(form.error(), None);
        assert!(!form.is_submitting());
        assert_eq!(harness.store.get(USER_KEY), None);
        assert_eq!(harness.navigator.visits(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn login_success_with_plain_text_body_still_signs_in() {
        let harness = harness();
        harness.transport.respond(200, "OK");
        let mut form = filled_login();

        submit_login(&harness, &mut form).await;

        assert_eq!(form.error(), None);
        assert_eq!(harness.navigator.visits(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn login_caches_user_object_verbatim() {
        let harness = harness();
        harness.transport.respond(
            200,
            r#"{"user": {"username": "alice", "id": 7, "avatarUrl": "a.png"}}"#,
        );
        let mut form = filled_login();

        submit_login(&harness, &mut form).await;

        let cached: Value =
            serde_json::from_str(&harness.store.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(cached, json!({"username": "alice", "id": 7, "avatarUrl": "a.png"}));
    }

    #[tokio::test]
    async fn login_rejected_shows_server_message_and_reenables_submit() {
        let harness = harness();
        harness
            .transport
            .respond(401, r#"{"message": "Invalid credentials"}"#);
        let mut form = filled_login();

        submit_login(&harness, &mut form).await;

        assert_eq!(form.error(), Some("Invalid credentials"));
        assert!(form.submit_enabled());
        assert!(harness.navigator.visits().is_empty());
        assert_eq!(harness.store.get(USER_KEY), None);
    }

    #[tokio::test]
    async fn login_rejected_without_message_uses_fallback() {
        let harness = harness();
        harness.transport.respond(500, "Internal Server Error");
        let mut form = filled_login();

        submit_login(&harness, &mut form).await;

        assert_eq!(form.error(), Some(LOGIN_FAILED));
    }

    #[tokio::test]
    async fn network_failure_shows_generic_error_without_navigation() {
        let harness = harness();
        harness.transport.fail(AppError::Network(
            "Unable to reach the server. Please try again.".to_string(),
        ));
        let mut form = filled_login();

        submit_login(&harness, &mut form).await;

        assert_eq!(
            form.error(),
            Some("Unable to reach the server. Please try again.")
        );
        assert!(form.submit_enabled());
        assert!(harness.navigator.visits().is_empty());
    }

    #[tokio::test]
    async fn invalid_registration_never_reaches_the_network() {
        let harness = harness();
        let cases = [
            ("ab", "longenough"),
            ("bad name", "longenough"),
            ("alice", "short"),
        ];

        for (username, password) in cases {
            let mut form = FormState::<RegisterSchema>::new();
            form.set_value(RegisterField::Username, username);
            form.set_value(RegisterField::Password, password);

            assert!(matches!(
                form.begin_submit(),
                Err(SubmitBlocked::Invalid(_))
            ));
        }

        assert!(harness.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn registration_posts_camel_case_body() {
        let harness = harness();
        harness
            .transport
            .respond(201, r#"{"user": {"username": "alice_01"}}"#);
        let mut form = FormState::<RegisterSchema>::new();
        form.set_value(RegisterField::Username, "alice_01");
        form.set_value(RegisterField::Password, "longenough");
        form.set_value(RegisterField::DisplayName, "Alice");

        let registration = form.begin_submit().unwrap();
        let result = harness.client.register(&registration).await;
        form.settle(settle_outcome(&result, REGISTER_FAILED));

        let requests = harness.transport.requests();
        assert_eq!(requests[0].url, "http://localhost:4000/api/auth/register");
        let body: Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"username": "alice_01", "password": "longenough", "displayName": "Alice"})
        );
        let cached: Value =
            serde_json::from_str(&harness.store.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(cached, json!({"username": "alice_01"}));
        assert_eq!(harness.navigator.visits(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn logout_clears_cache_even_when_network_fails() {
        let harness = harness();
        harness.store.set(USER_KEY, r#"{"username":"alice"}"#).unwrap();
        harness
            .transport
            .fail(AppError::Network("offline".to_string()));

        harness.client.logout().await;

        assert_eq!(harness.store.get(USER_KEY), None);
        assert_eq!(harness.navigator.visits(), vec!["/auth/login".to_string()]);
        let requests = harness.transport.requests();
        assert_eq!(requests[0].url, "http://localhost:4000/api/auth/logout");
        assert_eq!(requests[0].body, None);
    }

    #[tokio::test]
    async fn logout_clears_cache_on_success() {
        let harness = harness();
        harness.store.set(USER_KEY, r#"{"username":"alice"}"#).unwrap();
        harness.transport.respond(204, "");

        harness.client.logout().await;

        assert_eq!(harness.store.get(USER_KEY), None);
    }
}
