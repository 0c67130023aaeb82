//! Server side sessions.
//!
//! The request handlers only ever see the [`Session`] capability. Where the
//! values live (an in-memory map keyed by a signed cookie, see
//! [`SessionStore`]) is none of their business.

mod cookie;
mod store;

pub use cookie::{CookieSigner, SESSION_COOKIE};
pub use store::{LoadedSession, SessionId, SessionStore, DEFAULT_MAX_AGE_HOURS};

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("random generator error: {0}")]
    Random(#[from] libs::getrandom::Error),

    #[error("invalid signing key")]
    InvalidKey,
}

pub type SessionResult<T> = Result<T, SessionError>;

/// String to string storage scoped to one browser.
pub trait Session {
    fn get(&self, key: &str) -> Option<&str>;

    /// Overwrites any previous value stored under `key`.
    fn set(&mut self, key: &str, value: String);

    fn remove(&mut self, key: &str) -> Option<String>;

    fn clear(&mut self);

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Plain in-memory session values.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionData {
    values: HashMap<String, String>,
}

// Values may be credentials, only keys are printed.
impl fmt::Debug for SessionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = self.values.keys().collect::<Vec<_>>();
        keys.sort();
        f.debug_struct("SessionData").field("keys", &keys).finish()
    }
}

impl SessionData {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Session for SessionData {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}
