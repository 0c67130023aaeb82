mod auth_code;
pub mod clients;

pub use linkedin_http as http;
pub use linkedin_macros as macros;
pub use linkedin_model as model;

pub use auth_code::AuthCodeLinkedIn;

use crate::http::HttpError;
pub use macros::scopes;
pub use model::Token;

use std::collections::HashSet;

use libs::getrandom::getrandom;
use thiserror::Error;

pub mod prelude {
    pub use crate::clients::{BaseClient, OAuthClient};
    pub use crate::model::idtypes::Id;
}

/// Common form and query parameter names as constants.
pub(crate) mod params {
    pub const CLIENT_ID: &str = "client_id";
    pub const CLIENT_SECRET: &str = "client_secret";
    pub const CODE: &str = "code";
    pub const GRANT_TYPE: &str = "grant_type";
    pub const GRANT_TYPE_AUTH_CODE: &str = "authorization_code";
    pub const REDIRECT_URI: &str = "redirect_uri";
    pub const RESPONSE_TYPE_CODE: &str = "code";
    pub const RESPONSE_TYPE: &str = "response_type";
    pub const SCOPE: &str = "scope";
    pub const STATE: &str = "state";
}

/// Common alphabets for random number generation and similars
pub mod alphabets {
    pub const ALPHANUM: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
}

pub(crate) mod auth_urls {
    pub const AUTHORIZE: &str = "authorization";
    pub const TOKEN: &str = "accessToken";
}

/// Length of the generated `state` parameter.
pub const STATE_LENGTH: usize = 32;

/// Possible errors returned from the LinkedIn client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("url parse error: {0}")]
    ParseUrl(#[from] libs::url::ParseError),

    // Note that this type is boxed because its size might be very large in
    // comparison to the rest. For more information visit:
    // https://rust-lang.github.io/rust-clippy/master/index.html#large_enum_variant
    #[error("http error: {0}")]
    Http(Box<HttpError>),

    /// The token endpoint answered, but not with a token. The raw body is
    /// kept so that it can be shown to whoever started the login.
    #[error("unexpected token response: {source}")]
    TokenResponse {
        body: String,
        source: model::ModelError,
    },

    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("random generator error: {0}")]
    Random(#[from] libs::getrandom::Error),
}

// The conversion has to be done manually because it's in a `Box<T>`
impl From<HttpError> for ClientError {
    fn from(err: HttpError) -> Self {
        Self::Http(Box::new(err))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

pub const DEFAULT_AUTH_BASE_URL: &str = "https://www.linkedin.com/oauth/v2";

/// Struct to configure the LinkedIn client.
#[derive(Debug, Clone)]
pub struct Config {
    /// The LinkedIn Authentication prefix, [`DEFAULT_AUTH_BASE_URL`] by default.
    pub auth_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_base_url: String::from(DEFAULT_AUTH_BASE_URL),
        }
    }
}

/// Generate `length` random chars from the Operating System.
///
/// It is assumed that system always provides high-quality cryptographically
/// secure random data, ideally backed by hardware entropy sources.
///
/// Bytes at or above the largest multiple of the alphabet size are thrown
/// away, so every character is equally likely.
pub fn generate_random_string(length: usize, alphabet: &[u8]) -> ClientResult<String> {
    let range = alphabet.len().min(256);
    if range == 0 {
        return Ok(String::new());
    }
    let limit = 256 - 256 % range;

    let mut chars = Vec::with_capacity(length);
    let mut buf = [0u8; 64];
    while chars.len() < length {
        getrandom(&mut buf)?;
        let missing = length - chars.len();
        chars.extend(
            buf.iter()
                .map(|byte| *byte as usize)
                .filter(|byte| *byte < limit)
                .map(|byte| alphabet[byte % range] as char)
                .take(missing),
        );
    }

    Ok(chars.into_iter().collect())
}

/// Scopes are sent space separated. The order is fixed so that URLs are
/// reproducible.
#[inline]
pub(crate) fn join_scopes(scopes: &HashSet<String>) -> String {
    let mut scopes = scopes.iter().map(String::as_str).collect::<Vec<_>>();
    scopes.sort_unstable();
    scopes.join(" ")
}

/// Simple client credentials object for LinkedIn.
#[derive(Clone, Default)]
pub struct Credentials {
    pub id: String,
    /// Not needed to build the authorization URL, only for the exchange.
    pub secret: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("id", &self.id)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Credentials {
    /// Initialization with both the client ID and the client secret
    #[must_use]
    pub fn new(id: &str, secret: &str) -> Self {
        Self {
            id: id.to_owned(),
            secret: Some(secret.to_owned()),
        }
    }

    /// Initialization with just the client ID
    #[must_use]
    pub fn public(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            secret: None,
        }
    }
}

/// Structure that holds the required information for requests with OAuth.
#[derive(Debug, Clone, Default)]
pub struct OAuth {
    pub redirect_uri: String,
    /// Round-tripped through the consent screen, see
    /// [Cross-Site Request Forgery](https://tools.ietf.org/html/rfc6749#section-10.12)
    pub state: String,
    /// You could use macro [scopes!](crate::scopes) to build it at compile time easily
    pub scopes: HashSet<String>,
}

impl OAuth {
    /// OAuth information with a freshly generated `state`.
    pub fn with_random_state(
        redirect_uri: impl Into<String>,
        scopes: HashSet<String>,
    ) -> ClientResult<Self> {
        Ok(Self {
            redirect_uri: redirect_uri.into(),
            state: generate_random_string(STATE_LENGTH, alphabets::ALPHANUM)?,
            scopes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_strings_use_the_alphabet() {
        let state = generate_random_string(64, alphabets::ALPHANUM).unwrap();
        assert_eq!(state.len(), 64);
        assert!(state.bytes().all(|b| alphabets::ALPHANUM.contains(&b)));
        assert_ne!(state, generate_random_string(64, alphabets::ALPHANUM).unwrap());
        assert_eq!(generate_random_string(0, alphabets::ALPHANUM).unwrap(), "");
    }

    #[test]
    fn random_strings_are_not_skewed() {
        // 256 is not a multiple of 3, plain modulo would favour 'a'.
        let sample = generate_random_string(3000, b"abc").unwrap();
        assert_eq!(sample.len(), 3000);
        for letter in ['a', 'b', 'c'] {
            let count = sample.chars().filter(|c| *c == letter).count();
            assert!((800..1200).contains(&count), "{} seen {} times", letter, count);
        }
        assert!(sample.chars().all(|c| "abc".contains(c)));
    }

    #[test]
    fn scopes_are_joined_in_order() {
        let joined = join_scopes(&scopes!("w_member_social", "r_organization_social"));
        assert_eq!(joined, "r_organization_social w_member_social");
    }

    #[test]
    fn credentials_debug_hides_secret() {
        let creds = Credentials::new("id", "hunter2");
        assert!(!format!("{:?}", creds).contains("hunter2"));
    }
}
