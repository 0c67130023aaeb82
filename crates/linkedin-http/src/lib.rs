//! HTTP layer used by the LinkedIn client. The rest of the workspace talks to
//! [`BaseHttpClient`] only, so the token endpoint can be replaced in tests.

mod common;
mod reqwest;

pub use crate::common::{BaseHttpClient, Form, HttpError, HttpResult};
pub use crate::reqwest::{ReqwestClient as HttpClient, DEFAULT_TIMEOUT};
