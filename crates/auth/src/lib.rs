//! The LinkedIn sign-in flow, from the login redirect to the access token
//! sitting in the browser's session.
//!
//! A session is either unauthenticated (no token) or authenticated (token
//! present). Nothing here ever looks inside the token.

mod error;
mod flow;

pub use error::{AuthError, AuthResult};
pub use flow::{
    is_authenticated, token_obtained_at, CallbackParams, LoginFlow, LoginSettings,
    ACCESS_TOKEN_KEY, DEFAULT_SCOPE, OAUTH_STATE_KEY, TOKEN_OBTAINED_AT_KEY,
};
