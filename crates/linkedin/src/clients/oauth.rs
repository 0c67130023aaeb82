use crate::{clients::BaseClient, ClientResult, OAuth};

use async_trait::async_trait;
use libs::log;

/// This trait implements the methods available strictly to clients with user
/// authorization, including some parts of the authentication flow that are
/// shared.
#[async_trait]
pub trait OAuthClient: BaseClient {
    fn get_oauth(&self) -> &OAuth;

    /// Obtains a user access token given a code, as part of the OAuth
    /// authentication.
    async fn request_token(&self, code: &str) -> ClientResult<crate::Token>;

    /// As the [RFC 6749 indicates](https://datatracker.ietf.org/doc/html/rfc6749#section-4.1),
    /// the state should be the same between the request and the callback.
    /// An empty expected state never matches.
    fn check_state(&self, state: Option<&str>) -> bool {
        let expected_state = &self.get_oauth().state;
        let matches = !expected_state.is_empty() && state == Some(expected_state.as_str());
        if !matches {
            log::error!("Request state does not match the callback state");
        }
        matches
    }
}
