use crate::{AuthError, AuthResult};

use std::collections::HashSet;
use std::fmt;

use libs::chrono::{DateTime, Utc};
use libs::log;
use linkedin::{
    http::{BaseHttpClient, HttpClient},
    prelude::*,
    scopes, AuthCodeLinkedIn, Config, Credentials, OAuth,
};
use serde::Deserialize;
use session::Session;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const TOKEN_OBTAINED_AT_KEY: &str = "access_token_obtained_at";
pub const OAUTH_STATE_KEY: &str = "oauth_state";

/// Developer tier scope, enough to read organization shares.
pub const DEFAULT_SCOPE: &str = "r_organization_social";

/// Everything the flow needs to know, read once at startup.
#[derive(Clone)]
pub struct LoginSettings {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
    pub scopes: HashSet<String>,
    pub auth_base_url: Option<String>,
    /// Off unless explicitly enabled. Covers both `/preset` and the preset
    /// token.
    pub allow_token_injection: bool,
    pub preset_token: Option<String>,
}

impl Default for LoginSettings {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            redirect_uri: None,
            scopes: scopes!(DEFAULT_SCOPE),
            auth_base_url: None,
            allow_token_injection: false,
            preset_token: None,
        }
    }
}

impl fmt::Debug for LoginSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("LoginSettings")
            .field("client_id", &self.client_id)
            .field("client_secret", &redacted(&self.client_secret))
            .field("redirect_uri", &self.redirect_uri)
            .field("scopes", &self.scopes)
            .field("auth_base_url", &self.auth_base_url)
            .field("allow_token_injection", &self.allow_token_injection)
            .field("preset_token", &redacted(&self.preset_token))
            .finish()
    }
}

/// Query string LinkedIn redirects back with.
#[derive(Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

pub fn is_authenticated<S: Session>(session: &S) -> bool {
    session.contains(ACCESS_TOKEN_KEY)
}

pub fn token_obtained_at<S: Session>(session: &S) -> Option<DateTime<Utc>> {
    session
        .get(TOKEN_OBTAINED_AT_KEY)
        .and_then(|at| DateTime::parse_from_rfc3339(at).ok())
        .map(|at| at.with_timezone(&Utc))
}

fn store_token<S: Session>(session: &mut S, token: String, obtained_at: DateTime<Utc>) {
    session.set(ACCESS_TOKEN_KEY, token);
    session.set(TOKEN_OBTAINED_AT_KEY, obtained_at.to_rfc3339());
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> AuthResult<&'a str> {
    value
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .ok_or(AuthError::Configuration(name))
}

#[derive(Debug, Clone)]
pub struct LoginFlow<Http: BaseHttpClient = HttpClient> {
    settings: LoginSettings,
    config: Config,
    http: Http,
}

impl LoginFlow {
    pub fn new(settings: LoginSettings) -> Self {
        Self::with_http(settings, HttpClient::default())
    }
}

impl<Http: BaseHttpClient> LoginFlow<Http> {
    pub fn with_http(settings: LoginSettings, http: Http) -> Self {
        let mut config = Config::default();
        if let Some(url) = &settings.auth_base_url {
            config.auth_base_url = url.clone();
        }

        Self {
            settings,
            config,
            http,
        }
    }

    pub fn settings(&self) -> &LoginSettings {
        &self.settings
    }

    pub fn injection_enabled(&self) -> bool {
        self.settings.allow_token_injection
    }

    fn client(&self, creds: Credentials, oauth: OAuth) -> AuthCodeLinkedIn<Http> {
        AuthCodeLinkedIn::with_http(creds, oauth, self.config.clone(), self.http.clone())
    }

    /// Builds the consent screen URL the browser is redirected to. The only
    /// trace left in the session is the `state` the callback must bring back.
    pub fn initiate_login<S: Session>(&self, session: &mut S) -> AuthResult<String> {
        let client_id = required(&self.settings.client_id, "LINKEDIN_CLIENT_ID")?;
        let redirect_uri = required(&self.settings.redirect_uri, "LINKEDIN_REDIRECT_URI")?;

        let oauth = OAuth::with_random_state(redirect_uri, self.settings.scopes.clone())?;
        let client = self.client(Credentials::public(client_id), oauth);
        let url = client.get_authorize_url()?;

        session.set(OAUTH_STATE_KEY, client.oauth.state);
        log::info!("Redirecting to the LinkedIn consent screen");
        Ok(url)
    }

    /// Exchanges the code LinkedIn sent back for an access token and keeps
    /// the token in the session.
    ///
    /// At most one request is sent to the token endpoint, and none at all if
    /// the code, the state or a setting is missing.
    pub async fn handle_callback<S>(
        &self,
        session: &mut S,
        params: &CallbackParams,
    ) -> AuthResult<()>
    where
        S: Session + Send,
    {
        let code = match params.code.as_deref().filter(|code| !code.is_empty()) {
            Some(code) => code,
            None => {
                log::warn!(
                    "Callback without an authorization code ({})",
                    params.error.as_deref().unwrap_or("no error given")
                );
                return Err(AuthError::MissingCode {
                    reason: params
                        .error_description
                        .clone()
                        .or_else(|| params.error.clone()),
                });
            }
        };

        // One shot, whatever happens next.
        let expected_state = session.remove(OAUTH_STATE_KEY).unwrap_or_default();

        let client_id = required(&self.settings.client_id, "LINKEDIN_CLIENT_ID")?;
        let client_secret = required(&self.settings.client_secret, "LINKEDIN_CLIENT_SECRET")?;
        let redirect_uri = required(&self.settings.redirect_uri, "LINKEDIN_REDIRECT_URI")?;

        let oauth = OAuth {
            redirect_uri: redirect_uri.to_owned(),
            state: expected_state,
            scopes: self.settings.scopes.clone(),
        };
        let client = self.client(Credentials::new(client_id, client_secret), oauth);
        if !client.check_state(params.state.as_deref()) {
            return Err(AuthError::StateMismatch);
        }

        let token = client.request_token(code).await.map_err(|err| {
            log::warn!("Token exchange with LinkedIn failed");
            AuthError::from(err)
        })?;

        store_token(session, token.access_token, token.obtained_at);
        log::info!("Access token stored in session");
        Ok(())
    }

    /// Puts a token obtained elsewhere straight into the session, skipping
    /// LinkedIn entirely. Only available when injection was enabled.
    pub fn inject_token<S: Session>(&self, session: &mut S, token: Option<&str>) -> AuthResult<()> {
        if !self.settings.allow_token_injection {
            return Err(AuthError::InjectionDisabled);
        }

        // Blank counts as missing, but the value is stored exactly as given.
        let token = token
            .filter(|token| !token.trim().is_empty())
            .ok_or(AuthError::MissingToken)?;

        store_token(session, token.to_owned(), Utc::now());
        log::info!("Access token injected into session");
        Ok(())
    }

    /// Loads the configured preset token into a session that has none yet.
    /// Returns whether it did.
    pub fn preload_token<S: Session>(&self, session: &mut S) -> bool {
        if !self.settings.allow_token_injection || is_authenticated(session) {
            return false;
        }

        match self.settings.preset_token.as_deref() {
            Some(token) => self.inject_token(session, Some(token)).is_ok(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use libs::url::Url;
    use session::SessionData;
    use std::collections::HashMap;
    use test_util::MockHttpClient;

    fn settings() -> LoginSettings {
        LoginSettings {
            client_id: Some("client-id".to_owned()),
            client_secret: Some("client-secret".to_owned()),
            redirect_uri: Some("http://localhost:5000/callback".to_owned()),
            ..Default::default()
        }
    }

    fn flow(http: MockHttpClient) -> LoginFlow<MockHttpClient> {
        LoginFlow::with_http(settings(), http)
    }

    fn callback(code: Option<&str>, state: Option<&str>) -> CallbackParams {
        CallbackParams {
            code: code.map(ToOwned::to_owned),
            state: state.map(ToOwned::to_owned),
            ..Default::default()
        }
    }

    /// Runs the login step and returns the state it put in the URL.
    fn login(flow: &LoginFlow<MockHttpClient>, session: &mut SessionData) -> String {
        let url = flow.initiate_login(session).unwrap();
        let query: HashMap<_, _> = Url::parse(&url).unwrap().query_pairs().into_owned().collect();
        query["state"].clone()
    }

    #[test]
    fn login_url_carries_client_and_state() {
        let flow = flow(MockHttpClient::default());
        let mut session = SessionData::default();

        let url = flow.initiate_login(&mut session).unwrap();
        let parsed = Url::parse(&url).unwrap();
        let query: HashMap<_, _> = parsed.query_pairs().into_owned().collect();

        assert_eq!(parsed.host_str(), Some("www.linkedin.com"));
        assert_eq!(parsed.path(), "/oauth/v2/authorization");
        assert_eq!(query["response_type"], "code");
        assert_eq!(query["client_id"], "client-id");
        assert_eq!(query["redirect_uri"], "http://localhost:5000/callback");
        assert_eq!(query["scope"], "r_organization_social");
        assert_eq!(session.get(OAUTH_STATE_KEY), Some(query["state"].as_str()));
        assert!(!is_authenticated(&session));
    }

    #[test]
    fn login_without_client_id_or_redirect_fails() {
        for settings in [
            LoginSettings {
                client_id: None,
                ..settings()
            },
            LoginSettings {
                redirect_uri: Some("  ".to_owned()),
                ..settings()
            },
        ] {
            let flow = LoginFlow::with_http(settings, MockHttpClient::default());
            let mut session = SessionData::default();
            let err = flow.initiate_login(&mut session).unwrap_err();
            assert_eq!(err.class(), "ConfigurationError");
            assert!(session.is_empty());
        }
    }

    #[tokio::test]
    async fn callback_stores_token() {
        let http = MockHttpClient::respond_with(r#"{"access_token": "T"}"#);
        let flow = flow(http.clone());
        let mut session = SessionData::default();
        let state = login(&flow, &mut session);

        flow.handle_callback(&mut session, &callback(Some("code"), Some(&state)))
            .await
            .unwrap();

        assert!(is_authenticated(&session));
        assert_eq!(session.get(ACCESS_TOKEN_KEY), Some("T"));
        assert!(token_obtained_at(&session).is_some());
        assert_eq!(session.get(OAUTH_STATE_KEY), None);
        assert_eq!(http.request_count(), 1);
        assert_eq!(http.requests()[0].form["code"], "code");
    }

    #[tokio::test]
    async fn callback_without_code_makes_no_request() {
        let http = MockHttpClient::default();
        let flow = flow(http.clone());
        let mut session = SessionData::default();
        let state = login(&flow, &mut session);

        let params = CallbackParams {
            state: Some(state),
            error: Some("user_cancelled_login".to_owned()),
            error_description: Some("The user cancelled LinkedIn login".to_owned()),
            ..Default::default()
        };
        let err = flow.handle_callback(&mut session, &params).await.unwrap_err();

        assert_eq!(err.class(), "MissingCodeError");
        assert_eq!(err.diagnostic(), Some("The user cancelled LinkedIn login"));
        assert_eq!(http.request_count(), 0);
        assert!(!is_authenticated(&session));
    }

    #[tokio::test]
    async fn callback_with_error_response_keeps_status() {
        let http = MockHttpClient::respond_with(r#"{"error": "invalid_grant"}"#);
        let flow = flow(http.clone());
        let mut session = SessionData::default();
        let state = login(&flow, &mut session);

        let err = flow
            .handle_callback(&mut session, &callback(Some("used"), Some(&state)))
            .await
            .unwrap_err();

        assert_eq!(err.class(), "TokenExchangeError");
        assert_eq!(err.diagnostic(), Some(r#"{"error": "invalid_grant"}"#));
        assert!(!is_authenticated(&session));
        assert_eq!(http.request_count(), 1);
    }

    #[tokio::test]
    async fn callback_transport_failure_is_exchange_error() {
        let http = MockHttpClient::fail_with("operation timed out");
        let flow = flow(http);
        let mut session = SessionData::default();
        let state = login(&flow, &mut session);

        let err = flow
            .handle_callback(&mut session, &callback(Some("code"), Some(&state)))
            .await
            .unwrap_err();
        assert_eq!(err.class(), "TokenExchangeError");
        assert_eq!(err.diagnostic(), Some("operation timed out"));
    }

    #[tokio::test]
    async fn failed_exchange_keeps_previous_token() {
        let http = MockHttpClient::respond_with_status(400, r#"{"error":"invalid_request"}"#);
        let flow = LoginFlow::with_http(
            LoginSettings {
                allow_token_injection: true,
                ..settings()
            },
            http,
        );
        let mut session = SessionData::default();
        flow.inject_token(&mut session, Some("OLD")).unwrap();
        let state = login(&flow, &mut session);

        let err = flow
            .handle_callback(&mut session, &callback(Some("code"), Some(&state)))
            .await
            .unwrap_err();
        assert_eq!(err.class(), "TokenExchangeError");
        assert_eq!(session.get(ACCESS_TOKEN_KEY), Some("OLD"));
    }

    #[tokio::test]
    async fn callback_with_wrong_state_makes_no_request() {
        let http = MockHttpClient::default();
        let flow = flow(http.clone());
        let mut session = SessionData::default();
        let state = login(&flow, &mut session);

        let err = flow
            .handle_callback(&mut session, &callback(Some("code"), Some("forged")))
            .await
            .unwrap_err();
        assert_eq!(err.class(), "StateMismatchError");

        // the state was consumed by the failed attempt
        let err = flow
            .handle_callback(&mut session, &callback(Some("code"), Some(&state)))
            .await
            .unwrap_err();
        assert_eq!(err.class(), "StateMismatchError");

        let err = flow
            .handle_callback(&mut SessionData::default(), &callback(Some("code"), None))
            .await
            .unwrap_err();
        assert_eq!(err.class(), "StateMismatchError");
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn callback_without_secret_is_configuration_error() {
        let http = MockHttpClient::default();
        let flow = LoginFlow::with_http(
            LoginSettings {
                client_secret: None,
                ..settings()
            },
            http.clone(),
        );
        let mut session = SessionData::default();
        let state = login(&flow, &mut session);

        let err = flow
            .handle_callback(&mut session, &callback(Some("code"), Some(&state)))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Configuration("LINKEDIN_CLIENT_SECRET")));
        assert_eq!(http.request_count(), 0);
    }

    #[test]
    fn injection_is_off_by_default() {
        let flow = flow(MockHttpClient::default());
        let mut session = SessionData::default();

        let err = flow.inject_token(&mut session, Some("ABC")).unwrap_err();
        assert!(matches!(err, AuthError::InjectionDisabled));
        assert!(!is_authenticated(&session));
    }

    #[test]
    fn injection_stores_token() {
        let flow = LoginFlow::with_http(
            LoginSettings {
                allow_token_injection: true,
                ..settings()
            },
            MockHttpClient::default(),
        );
        let mut session = SessionData::default();

        let err = flow.inject_token(&mut session, None).unwrap_err();
        assert_eq!(err.class(), "MissingTokenError");
        let err = flow.inject_token(&mut session, Some("")).unwrap_err();
        assert_eq!(err.class(), "MissingTokenError");
        assert!(!is_authenticated(&session));

        flow.inject_token(&mut session, Some("ABC")).unwrap();
        assert!(is_authenticated(&session));
        assert_eq!(session.get(ACCESS_TOKEN_KEY), Some("ABC"));

        flow.inject_token(&mut session, Some("DEF")).unwrap();
        assert_eq!(session.get(ACCESS_TOKEN_KEY), Some("DEF"));

        // a missing parameter leaves the current token alone
        flow.inject_token(&mut session, None).unwrap_err();
        assert_eq!(session.get(ACCESS_TOKEN_KEY), Some("DEF"));
    }

    #[test]
    fn injected_token_is_stored_verbatim() {
        let flow = LoginFlow::with_http(
            LoginSettings {
                allow_token_injection: true,
                ..settings()
            },
            MockHttpClient::default(),
        );
        let mut session = SessionData::default();

        let err = flow.inject_token(&mut session, Some(" \t ")).unwrap_err();
        assert_eq!(err.class(), "MissingTokenError");
        assert!(!is_authenticated(&session));

        flow.inject_token(&mut session, Some(" ABC ")).unwrap();
        assert_eq!(session.get(ACCESS_TOKEN_KEY), Some(" ABC "));
    }

    #[test]
    fn preset_token_loads_only_when_enabled_and_empty() {
        let preset = LoginSettings {
            preset_token: Some("PRESET".to_owned()),
            ..settings()
        };

        let disabled = LoginFlow::with_http(preset.clone(), MockHttpClient::default());
        let mut session = SessionData::default();
        assert!(!disabled.preload_token(&mut session));
        assert!(!is_authenticated(&session));

        let enabled = LoginFlow::with_http(
            LoginSettings {
                allow_token_injection: true,
                ..preset
            },
            MockHttpClient::default(),
        );
        assert!(enabled.preload_token(&mut session));
        assert_eq!(session.get(ACCESS_TOKEN_KEY), Some("PRESET"));

        enabled.inject_token(&mut session, Some("MINE")).unwrap();
        assert!(!enabled.preload_token(&mut session));
        assert_eq!(session.get(ACCESS_TOKEN_KEY), Some("MINE"));
    }

    #[test]
    fn settings_debug_hides_secrets() {
        let settings = LoginSettings {
            preset_token: Some("PRESET".to_owned()),
            ..settings()
        };
        let debugged = format!("{:?}", settings);
        assert!(!debugged.contains("client-secret"));
        assert!(!debugged.contains("PRESET"));
    }
}
