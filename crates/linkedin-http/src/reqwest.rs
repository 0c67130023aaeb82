//! The client implementation for the reqwest HTTP client, which is async by
//! default.

use super::{BaseHttpClient, Form, HttpError, HttpResult};

use std::time::Duration;

use async_trait::async_trait;
use libs::log;
use reqwest::{Method, RequestBuilder};

/// Ceiling for every outbound call. There are no retries on top of it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        // Strip the URL, it is constant and only adds noise to diagnostics.
        HttpError::Transport(err.without_url().to_string())
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestClient {
    /// reqwest needs an instance of its client to perform requests.
    client: reqwest::Client,
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }
}

impl ReqwestClient {
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::ClientBuilder::new()
            .timeout(timeout)
            .build()
            // building with only a timeout set cannot fail
            .unwrap_or_default();

        Self { client }
    }

    async fn request<D>(&self, method: Method, url: &str, add_data: D) -> HttpResult<String>
    where
        D: Fn(RequestBuilder) -> RequestBuilder,
    {
        let request = add_data(self.client.request(method.clone(), url));

        log::debug!("Making request {} {}", method, url);
        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            log::debug!("Request {} {} answered with {}", method, url, status);
            Err(HttpError::StatusCode {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl BaseHttpClient for ReqwestClient {
    #[inline]
    async fn post_form(&self, url: &str, payload: &Form<'_>) -> HttpResult<String> {
        self.request(Method::POST, url, |req| req.form(payload)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::net::SocketAddr;

    use warp::Filter;

    fn spawn_token_endpoint() -> SocketAddr {
        let route = warp::post()
            .and(warp::path("accessToken"))
            .and(warp::body::form())
            .map(|form: HashMap<String, String>| {
                match form.get("code").map(String::as_str) {
                    Some("good") => warp::reply::with_status(
                        r#"{"access_token":"T"}"#.to_string(),
                        warp::http::StatusCode::OK,
                    ),
                    _ => warp::reply::with_status(
                        r#"{"error":"invalid_grant"}"#.to_string(),
                        warp::http::StatusCode::BAD_REQUEST,
                    ),
                }
            });
        let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        addr
    }

    #[tokio::test]
    async fn post_form_returns_body_on_success() {
        let addr = spawn_token_endpoint();
        let client = ReqwestClient::default();
        let mut form = Form::new();
        form.insert("code", "good");

        let body = client
            .post_form(&format!("http://{}/accessToken", addr), &form)
            .await
            .unwrap();
        assert_eq!(body, r#"{"access_token":"T"}"#);
    }

    #[tokio::test]
    async fn post_form_keeps_body_of_failed_status() {
        let addr = spawn_token_endpoint();
        let client = ReqwestClient::default();
        let mut form = Form::new();
        form.insert("code", "stale");

        let err = client
            .post_form(&format!("http://{}/accessToken", addr), &form)
            .await
            .unwrap_err();
        match err {
            HttpError::StatusCode { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("invalid_grant"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let client = ReqwestClient::with_timeout(Duration::from_secs(1));
        let err = client
            .post_form("http://127.0.0.1:9/accessToken", &Form::new())
            .await
            .unwrap_err();
        assert!(matches!(err, HttpError::Transport(_)));
    }
}
