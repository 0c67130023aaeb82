use std::env;
use std::fmt;

use auth::LoginSettings;
use errors::error::{configuration_error, invalid_env_value};
use libs::anyhow::Error;
use linkedin_model::OrganizationId;

use super::Flags;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_ORGANIZATION_ID: &str = "YOUR_ORG_URN";

pub const CLIENT_ID_VAR: &str = "LINKEDIN_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "LINKEDIN_CLIENT_SECRET";
pub const REDIRECT_URI_VAR: &str = "LINKEDIN_REDIRECT_URI";
pub const AUTH_BASE_URL_VAR: &str = "LINKEDIN_AUTH_BASE_URL";
pub const ORGANIZATION_ID_VAR: &str = "LINKEDIN_ORGANIZATION_ID";
pub const SESSION_SECRET_VAR: &str = "SESSION_SECRET";
pub const PRESET_TOKEN_VAR: &str = "PRESET_ACCESS_TOKEN";
pub const PORT_VAR: &str = "PORT";
pub const DEBUG_VAR: &str = "DEMO_DEBUG";

/// Settings resolved once at startup from the environment and the command
/// line. Flags win over variables.
#[derive(Clone)]
pub struct AppConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
    pub auth_base_url: Option<String>,
    pub organization_id: OrganizationId,
    pub session_secret: Option<String>,
    pub preset_token: Option<String>,
    pub port: u16,
    pub debug: bool,
}

impl AppConfig {
    pub fn from_env(flags: &Flags) -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok(), flags)
    }

    /// Blank values count as unset.
    pub fn from_lookup<L>(lookup: L, flags: &Flags) -> Result<Self, Error>
    where
        L: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match flags.port() {
            Some(port) => port,
            None => match var(PORT_VAR) {
                Some(value) => value
                    .parse::<u16>()
                    .map_err(|_| invalid_env_value(PORT_VAR, &value))?,
                None => DEFAULT_PORT,
            },
        };

        let debug = flags.debug
            || match var(DEBUG_VAR) {
                Some(value) => {
                    parse_bool(&value).ok_or_else(|| invalid_env_value(DEBUG_VAR, &value))?
                }
                None => false,
            };

        let organization =
            var(ORGANIZATION_ID_VAR).unwrap_or_else(|| DEFAULT_ORGANIZATION_ID.to_string());
        let organization_id = OrganizationId::from_urn(&organization)
            .or_else(|_| OrganizationId::from_id(organization.as_str()))
            .map_err(|err| {
                configuration_error(format!(
                    "Invalid value for {}: '{}' ({})",
                    ORGANIZATION_ID_VAR, organization, err
                ))
            })?;

        Ok(Self {
            client_id: var(CLIENT_ID_VAR),
            client_secret: var(CLIENT_SECRET_VAR),
            redirect_uri: var(REDIRECT_URI_VAR),
            auth_base_url: var(AUTH_BASE_URL_VAR),
            organization_id,
            session_secret: var(SESSION_SECRET_VAR),
            preset_token: var(PRESET_TOKEN_VAR),
            port,
            debug,
        })
    }

    pub fn login_settings(&self) -> LoginSettings {
        LoginSettings {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            redirect_uri: self.redirect_uri.clone(),
            auth_base_url: self.auth_base_url.clone(),
            allow_token_injection: self.debug,
            preset_token: self.preset_token.clone(),
            ..LoginSettings::default()
        }
    }

    /// Variable name and whether it is set, without the value.
    pub fn presence(&self) -> Vec<(&'static str, bool)> {
        vec![
            (CLIENT_ID_VAR, self.client_id.is_some()),
            (CLIENT_SECRET_VAR, self.client_secret.is_some()),
            (REDIRECT_URI_VAR, self.redirect_uri.is_some()),
            (SESSION_SECRET_VAR, self.session_secret.is_some()),
            (PRESET_TOKEN_VAR, self.preset_token.is_some()),
        ]
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("AppConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &redacted(&self.client_secret))
            .field("redirect_uri", &self.redirect_uri)
            .field("auth_base_url", &self.auth_base_url)
            .field("organization_id", &self.organization_id)
            .field("session_secret", &redacted(&self.session_secret))
            .field("preset_token", &redacted(&self.preset_token))
            .field("port", &self.port)
            .field("debug", &self.debug)
            .finish()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
