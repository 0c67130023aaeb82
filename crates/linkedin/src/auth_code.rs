use crate::{
    auth_urls,
    clients::{BaseClient, OAuthClient},
    http::{BaseHttpClient, Form, HttpClient},
    join_scopes, params, ClientError, ClientResult, Config, Credentials, OAuth, Token,
};

use std::collections::HashMap;

use async_trait::async_trait;
use libs::log;
use libs::url::Url;

/// Client for the [Authorization Code Flow](https://learn.microsoft.com/en-us/linkedin/shared/authentication/authorization-code-flow).
///
/// It doesn't keep the obtained token, tokens belong to whoever started the
/// login and are handed back to the caller.
#[derive(Clone, Debug, Default)]
pub struct AuthCodeLinkedIn<Http: BaseHttpClient = HttpClient> {
    pub creds: Credentials,
    pub oauth: OAuth,
    pub config: Config,
    pub(crate) http: Http,
}

/// This client has access to the base methods.
impl<Http: BaseHttpClient> BaseClient for AuthCodeLinkedIn<Http> {
    type Http = Http;

    fn get_http(&self) -> &Http {
        &self.http
    }

    fn get_creds(&self) -> &Credentials {
        &self.creds
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}

/// This client includes user authorization, so it has access to the user
/// private endpoints in [`OAuthClient`].
#[async_trait]
impl<Http: BaseHttpClient> OAuthClient for AuthCodeLinkedIn<Http> {
    fn get_oauth(&self) -> &OAuth {
        &self.oauth
    }

    /// Obtains a user access token given a code, as part of the OAuth
    /// authentication.
    async fn request_token(&self, code: &str) -> ClientResult<Token> {
        log::info!("Requesting Auth Code token");

        let client_secret = self
            .creds
            .secret
            .as_deref()
            .ok_or(ClientError::MissingCredential("client secret"))?;
        let mut data = Form::new();
        data.insert(params::GRANT_TYPE, params::GRANT_TYPE_AUTH_CODE);
        data.insert(params::CODE, code);
        data.insert(params::REDIRECT_URI, &self.oauth.redirect_uri);
        data.insert(params::CLIENT_ID, &self.creds.id);
        data.insert(params::CLIENT_SECRET, client_secret);

        self.fetch_access_token(&data).await
    }
}

impl AuthCodeLinkedIn {
    /// Builds a new [`AuthCodeLinkedIn`] given a pair of client credentials and
    /// OAuth information.
    #[must_use]
    pub fn new(creds: Credentials, oauth: OAuth) -> Self {
        Self {
            creds,
            oauth,
            ..Default::default()
        }
    }
}

impl<Http: BaseHttpClient> AuthCodeLinkedIn<Http> {
    /// Same as [`Self::new`] but with an extra parameter to configure the
    /// client, and the HTTP client to send requests with.
    #[must_use]
    pub fn with_http(creds: Credentials, oauth: OAuth, config: Config, http: Http) -> Self {
        Self {
            creds,
            oauth,
            config,
            http,
        }
    }

    /// Returns the URL needed to authorize the current client as the first step
    /// in the authorization flow.
    pub fn get_authorize_url(&self) -> ClientResult<String> {
        log::info!("Building auth URL");

        let scopes = join_scopes(&self.oauth.scopes);

        let mut payload: HashMap<&str, &str> = HashMap::new();
        payload.insert(params::RESPONSE_TYPE, params::RESPONSE_TYPE_CODE);
        payload.insert(params::CLIENT_ID, &self.creds.id);
        payload.insert(params::REDIRECT_URI, &self.oauth.redirect_uri);
        payload.insert(params::SCOPE, &scopes);
        if !self.oauth.state.is_empty() {
            payload.insert(params::STATE, &self.oauth.state);
        }

        let request_url = self.auth_url(auth_urls::AUTHORIZE);
        let parsed = Url::parse_with_params(&request_url, payload)?;
        Ok(parsed.into())
    }
}
