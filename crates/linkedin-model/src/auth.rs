//! All objects related to the auth flows defined by LinkedIn's API.

use crate::{custom_serde::space_separated_scopes, ModelError, ModelResult};

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// LinkedIn access token information.
///
/// The token itself is opaque: it is never parsed and its expiry is never
/// checked. `Debug` output redacts it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// An access token that can be provided in subsequent calls
    pub access_token: String,
    /// Lifetime in seconds as reported by LinkedIn. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    /// A list of [scopes](https://learn.microsoft.com/en-us/linkedin/shared/authentication/getting-access)
    /// which have been granted for this `access_token`
    #[serde(default, rename = "scope", with = "space_separated_scopes")]
    pub scopes: HashSet<String>,
    /// When this token was received, in UTC.
    #[serde(skip, default = "Utc::now")]
    pub obtained_at: DateTime<Utc>,
}

impl Default for Token {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            expires_in: None,
            scopes: HashSet::new(),
            obtained_at: Utc::now(),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .field("scopes", &self.scopes)
            .field("obtained_at", &self.obtained_at)
            .finish()
    }
}

impl Token {
    /// Builds a token out of a token endpoint response body.
    ///
    /// Only a non-empty string `access_token` decides success. `expires_in`
    /// and `scope` are picked up when they have the expected shape and
    /// ignored otherwise.
    pub fn from_response(body: &str) -> ModelResult<Self> {
        let value: Value = serde_json::from_str(body)?;
        let access_token = match value.get("access_token") {
            Some(Value::String(token)) if !token.is_empty() => token.clone(),
            _ => return Err(ModelError::MissingAccessToken),
        };

        Ok(Self {
            access_token,
            expires_in: value.get("expires_in").and_then(Value::as_u64),
            scopes: value
                .get("scope")
                .and_then(Value::as_str)
                .map(space_separated_scopes::split)
                .unwrap_or_default(),
            obtained_at: Utc::now(),
        })
    }
}
