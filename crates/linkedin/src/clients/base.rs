use crate::{
    auth_urls,
    http::{BaseHttpClient, Form},
    ClientError, ClientResult, Config, Credentials, Token,
};

use async_trait::async_trait;
use libs::log;

/// This trait implements the basic endpoints shared by every LinkedIn client.
#[async_trait]
pub trait BaseClient: Send + Sync {
    type Http: BaseHttpClient;

    fn get_http(&self) -> &Self::Http;
    fn get_creds(&self) -> &Credentials;
    fn get_config(&self) -> &Config;

    /// If it's a relative URL like "accessToken", the prefix is appended to
    /// it. Otherwise, the same URL is returned.
    fn auth_url(&self, url: &str) -> String {
        let mut base = self.get_config().auth_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        base + url
    }

    /// Sends a request to LinkedIn for an access token.
    ///
    /// Exactly one request is made. A response without a token is returned
    /// as [`ClientError::TokenResponse`] with the body left untouched.
    async fn fetch_access_token(&self, payload: &Form<'_>) -> ClientResult<Token> {
        let response = self
            .get_http()
            .post_form(&self.auth_url(auth_urls::TOKEN), payload)
            .await?;

        match Token::from_response(&response) {
            Ok(token) => {
                log::debug!("Token endpoint returned a token {:?}", token);
                Ok(token)
            }
            Err(source) => Err(ClientError::TokenResponse {
                body: response,
                source,
            }),
        }
    }
}
