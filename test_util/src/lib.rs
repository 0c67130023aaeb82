use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use libs::parking_lot::Mutex;
use linkedin_http::{BaseHttpClient, Form, HttpError, HttpResult};

/// What the mocked endpoint answers with, every time it is called.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Body(String),
    Status(u16, String),
    Transport(String),
}

impl Default for MockResponse {
    fn default() -> Self {
        MockResponse::Body(r#"{"access_token":"T"}"#.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub form: HashMap<String, String>,
}

#[derive(Debug, Default)]
struct MockState {
    response: MockResponse,
    requests: Vec<RecordedRequest>,
}

/// Stand-in for the token endpoint. Clones share the recorded requests, so a
/// test can keep one handle and give the other to the code under test.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    state: Arc<Mutex<MockState>>,
}

impl MockHttpClient {
    pub fn new(response: MockResponse) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                response,
                requests: vec![],
            })),
        }
    }

    pub fn respond_with(body: &str) -> Self {
        Self::new(MockResponse::Body(body.to_string()))
    }

    pub fn respond_with_status(status: u16, body: &str) -> Self {
        Self::new(MockResponse::Status(status, body.to_string()))
    }

    pub fn fail_with(message: &str) -> Self {
        Self::new(MockResponse::Transport(message.to_string()))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().requests.len()
    }

    fn record(&self, url: &str, payload: &Form<'_>) -> HttpResult<String> {
        let mut state = self.state.lock();
        state.requests.push(RecordedRequest {
            url: url.to_string(),
            form: payload
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });

        match &state.response {
            MockResponse::Body(body) => Ok(body.clone()),
            MockResponse::Status(status, body) => Err(HttpError::StatusCode {
                status: *status,
                body: body.clone(),
            }),
            MockResponse::Transport(message) => Err(HttpError::Transport(message.clone())),
        }
    }
}

#[async_trait]
impl BaseHttpClient for MockHttpClient {
    async fn post_form(&self, url: &str, payload: &Form<'_>) -> HttpResult<String> {
        self.record(url, payload)
    }
}
