//! Credential login and registration against the verification backend.

use std::time::Duration;

use serde::Serialize;

use crate::error::AuthError;
use crate::session::Session;

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Client for the `/auth/*` endpoints.
pub struct CredentialsApi {
    http: reqwest::Client,
    base_url: String,
}

impl CredentialsApi {
    /// Create a client for the given backend.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("trustcheck/0.1")
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::LoginFailed`] on any non-success status; the
    /// backend does not distinguish bad credentials from other failures, and
    /// nothing is persisted. Transport failures surface as
    /// [`AuthError::Http`].
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.post_credentials("/auth/login", email, password, AuthError::LoginFailed)
            .await
    }

    /// Create an account and receive a session for it.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RegistrationFailed`] on any non-success status
    /// (commonly a taken email); nothing is persisted.
    pub async fn register(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.post_credentials(
            "/auth/register",
            email,
            password,
            AuthError::RegistrationFailed,
        )
        .await
    }

    async fn post_credentials(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
        failure: AuthError,
    ) -> Result<Session, AuthError> {
        let url = format!("{}{endpoint}", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(&Credentials { email, password })
            .send()
            .await?;

        if !resp.status().is_success() {
            tracing::debug!(status = %resp.status(), endpoint, "credential call rejected");
            return Err(failure);
        }

        let session: Session = resp.json().await?;
        Ok(session)
    }
}
