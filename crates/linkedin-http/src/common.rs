use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

pub type Form<'a> = HashMap<&'a str, &'a str>;

#[derive(Debug, Error)]
pub enum HttpError {
    /// The request never produced a response: connection refused, DNS, TLS,
    /// or the timeout was hit.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status. The body is kept
    /// verbatim, providers put their diagnostics there.
    #[error("status code {status}: {body}")]
    StatusCode { status: u16, body: String },
}

pub type HttpResult<T> = Result<T, HttpError>;

/// This trait represents the interface to be implemented for an HTTP client,
/// which is kept separate from the LinkedIn client for testing.
///
/// The OAuth flow only ever posts a url-encoded form to the token endpoint.
#[async_trait]
pub trait BaseHttpClient: Send + Sync + Default + Clone + fmt::Debug {
    async fn post_form(&self, url: &str, payload: &Form<'_>) -> HttpResult<String>;
}
