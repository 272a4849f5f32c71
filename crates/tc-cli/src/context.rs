//! Shared per-invocation application context.

use tc_auth::{CredentialsApi, Session, SessionStore};
use tc_client::VerifyClient;
use tc_config::TrustConfig;

/// Everything a command handler needs: the loaded config, the backend
/// client, the auth endpoints, and the session store.
pub struct AppContext {
    pub config: TrustConfig,
    pub client: VerifyClient,
    pub auth: CredentialsApi,
    pub sessions: SessionStore,
}

impl AppContext {
    /// Build the context from loaded configuration.
    pub fn init(config: TrustConfig) -> anyhow::Result<Self> {
        let client = VerifyClient::new(&config.backend);
        let auth = CredentialsApi::new(config.backend.base(), config.backend.timeout_secs);
        let sessions = SessionStore::new()?;
        Ok(Self {
            config,
            client,
            auth,
            sessions,
        })
    }

    /// Resolve the active session, failing with a login hint before any
    /// network traffic when there is none.
    pub fn require_session(&self) -> anyhow::Result<Session> {
        Ok(self.sessions.require()?)
    }
}
