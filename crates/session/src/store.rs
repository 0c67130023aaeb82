use crate::{CookieSigner, Session, SessionData, SessionResult};

use std::collections::HashMap;
use std::fmt;

use libs::chrono::{DateTime, Duration, Utc};
use libs::getrandom::getrandom;
use libs::hex;
use libs::log;
use libs::parking_lot::Mutex;

pub const DEFAULT_MAX_AGE_HOURS: i64 = 24;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    fn generate() -> SessionResult<Self> {
        let mut buf = [0u8; 16];
        getrandom(&mut buf)?;
        Ok(Self(hex::encode(buf)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Session ids are bearer credentials too, keep them out of the logs.
impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({}…)", &self.0[..6.min(self.0.len())])
    }
}

/// A session checked out of the store for the duration of one request.
#[derive(Debug)]
pub struct LoadedSession {
    id: SessionId,
    data: SessionData,
    is_new: bool,
}

impl LoadedSession {
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Whether the browser has to be sent a cookie for this session.
    pub fn is_new(&self) -> bool {
        self.is_new
    }
}

impl Session for LoadedSession {
    fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        self.data.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        self.data.remove(key)
    }

    fn clear(&mut self) {
        self.data.clear()
    }
}

struct Entry {
    data: SessionData,
    last_seen: DateTime<Utc>,
}

/// In-memory sessions keyed by a signed cookie.
///
/// Sessions idle for longer than `max_age` are dropped the next time any
/// session is loaded. Concurrent requests of one browser each work on their
/// own copy, the last one to be saved wins.
pub struct SessionStore {
    signer: CookieSigner,
    max_age: Duration,
    sessions: Mutex<HashMap<SessionId, Entry>>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("max_age", &self.max_age)
            .field("sessions", &self.sessions.lock().len())
            .finish()
    }
}

impl SessionStore {
    pub fn new(secret: &[u8]) -> SessionResult<Self> {
        Self::with_max_age(secret, Duration::hours(DEFAULT_MAX_AGE_HOURS))
    }

    pub fn with_max_age(secret: &[u8], max_age: Duration) -> SessionResult<Self> {
        Ok(Self {
            signer: CookieSigner::new(secret)?,
            max_age,
            sessions: Mutex::new(HashMap::new()),
        })
    }

    /// Looks up the session of a cookie value. Missing, forged and expired
    /// cookies all get a brand new empty session.
    pub fn load(&self, cookie: Option<&str>) -> SessionResult<LoadedSession> {
        self.load_at(cookie, Utc::now())
    }

    fn load_at(&self, cookie: Option<&str>, now: DateTime<Utc>) -> SessionResult<LoadedSession> {
        let mut sessions = self.sessions.lock();
        let max_age = self.max_age;
        sessions.retain(|_, entry| now - entry.last_seen <= max_age);

        if let Some(id) = cookie.and_then(|c| self.signer.verify(c)) {
            let id = SessionId(id.to_owned());
            if let Some(entry) = sessions.get(&id) {
                return Ok(LoadedSession {
                    data: entry.data.clone(),
                    id,
                    is_new: false,
                });
            }
            log::debug!("Unknown or expired session {:?}", id);
        } else if cookie.is_some() {
            log::debug!("Discarding session cookie with a bad signature");
        }

        Ok(LoadedSession {
            id: SessionId::generate()?,
            data: SessionData::default(),
            is_new: true,
        })
    }

    /// Writes the session back. Returns the `Set-Cookie` header value the
    /// browser needs, if any.
    pub fn save(&self, session: LoadedSession) -> Option<String> {
        self.save_at(session, Utc::now())
    }

    fn save_at(&self, session: LoadedSession, now: DateTime<Utc>) -> Option<String> {
        let LoadedSession { id, data, is_new } = session;
        // Nothing worth remembering, and no cookie points at it yet.
        if is_new && data.is_empty() {
            return None;
        }

        let header = is_new.then(|| self.signer.set_cookie_header(id.as_str()));

        self.sessions.lock().insert(
            id,
            Entry {
                data,
                last_seen: now,
            },
        );
        header
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
