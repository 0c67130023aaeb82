use linkedin::{http::HttpError, ClientError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// A required setting is missing. Names the environment variable.
    #[error("{0} is not configured")]
    Configuration(&'static str),

    /// The provider redirected back without a code, usually because the user
    /// declined. Carries the provider's description when it sent one.
    #[error("no authorization code was received")]
    MissingCode { reason: Option<String> },

    #[error("no token was supplied, pass it as ?token=...")]
    MissingToken,

    #[error("the login request could not be verified, please start over")]
    StateMismatch,

    #[error("token injection is disabled")]
    InjectionDisabled,

    /// The token endpoint did not hand out a token. The diagnostic is the raw
    /// provider response or the transport error, for display only.
    #[error("error getting access token")]
    TokenExchange { diagnostic: String },

    #[error("login could not be started: {0}")]
    Internal(String),
}

impl AuthError {
    /// Name of the error class as shown to users.
    pub fn class(&self) -> &'static str {
        match self {
            AuthError::Configuration(_) => "ConfigurationError",
            AuthError::MissingCode { .. } => "MissingCodeError",
            AuthError::MissingToken => "MissingTokenError",
            AuthError::StateMismatch => "StateMismatchError",
            AuthError::InjectionDisabled => "InjectionDisabled",
            AuthError::TokenExchange { .. } => "TokenExchangeError",
            AuthError::Internal(_) => "InternalError",
        }
    }

    /// Extra text worth showing next to the message.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            AuthError::MissingCode { reason } => reason.as_deref(),
            AuthError::TokenExchange { diagnostic } => Some(diagnostic),
            _ => None,
        }
    }
}

impl From<ClientError> for AuthError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::TokenResponse { body, .. } => {
                AuthError::TokenExchange { diagnostic: body }
            }
            ClientError::Http(err) => match *err {
                HttpError::StatusCode { body, .. } => {
                    AuthError::TokenExchange { diagnostic: body }
                }
                HttpError::Transport(message) => AuthError::TokenExchange {
                    diagnostic: message,
                },
            },
            ClientError::MissingCredential(_) => AuthError::Configuration("LINKEDIN_CLIENT_SECRET"),
            other => AuthError::Internal(other.to_string()),
        }
    }
}

pub type AuthResult<T> = Result<T, AuthError>;
