use crate::{SessionError, SessionResult};

use libs::hex;
use libs::hmac::{Hmac, Mac};
use libs::sha2::Sha256;

pub const SESSION_COOKIE: &str = "engage_session";

type HmacSha256 = Hmac<Sha256>;

/// Signs session ids so that a browser cannot pick somebody else's id.
///
/// Cookie values have the form `<id>.<hex hmac-sha256 of id>`.
#[derive(Clone)]
pub struct CookieSigner {
    mac: HmacSha256,
}

impl CookieSigner {
    pub fn new(secret: &[u8]) -> SessionResult<Self> {
        let mac = HmacSha256::new_from_slice(secret).map_err(|_| SessionError::InvalidKey)?;
        Ok(Self { mac })
    }

    pub fn sign(&self, value: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(value.as_bytes());
        format!("{}.{}", value, hex::encode(mac.finalize().into_bytes()))
    }

    /// Returns the signed value if the signature checks out.
    pub fn verify<'a>(&self, signed: &'a str) -> Option<&'a str> {
        let (value, signature) = signed.rsplit_once('.')?;
        let signature = hex::decode(signature).ok()?;

        let mut mac = self.mac.clone();
        mac.update(value.as_bytes());
        mac.verify_slice(&signature).ok().map(|_| value)
    }

    /// `Set-Cookie` header value for a signed session id.
    pub fn set_cookie_header(&self, value: &str) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            SESSION_COOKIE,
            self.sign(value)
        )
    }
}

impl std::fmt::Debug for CookieSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CookieSigner")
    }
}
