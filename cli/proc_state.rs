use crate::args::AppConfig;
use auth::LoginFlow;
use errors::error::generic_error;
use fixtures::Fixtures;
use libs::anyhow::Error;
use libs::getrandom;
use libs::log;
use session::SessionStore;
use templates::Hera;

use std::ops::Deref;
use std::sync::Arc;

const GENERATED_SECRET_LEN: usize = 32;

/// Everything a request handler can reach. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ProcState(Arc<Inner>);

#[derive(Debug)]
pub struct Inner {
    pub config: AppConfig,
    pub flow: LoginFlow,
    pub sessions: SessionStore,
    pub hera: Hera,
    pub fixtures: Fixtures,
}

impl Deref for ProcState {
    type Target = Arc<Inner>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ProcState {
    pub fn build(config: AppConfig) -> Result<Self, Error> {
        let secret = match &config.session_secret {
            Some(secret) => secret.as_bytes().to_vec(),
            None => {
                log::warn!("SESSION_SECRET is not set, sessions will not survive a restart");
                let mut secret = vec![0u8; GENERATED_SECRET_LEN];
                getrandom::getrandom(&mut secret).map_err(|err| {
                    generic_error(format!("Could not generate a session secret: {err}"))
                })?;
                secret
            }
        };
        let sessions = SessionStore::new(&secret)?;

        let flow = LoginFlow::new(config.login_settings());
        if flow.injection_enabled() {
            log::warn!("Debug mode: token injection through /preset is enabled");
        }

        Ok(ProcState(Arc::new(Inner {
            flow,
            sessions,
            hera: Hera::new()?,
            fixtures: Fixtures::builtin(),
            config,
        })))
    }
}
