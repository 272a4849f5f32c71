use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not logged in — run `tck auth login`")]
    NotAuthenticated,

    #[error("login failed (check email and password)")]
    LoginFailed,

    #[error("registration failed (email may already be taken)")]
    RegistrationFailed,

    #[error("auth request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("session store error: {0}")]
    SessionStoreError(String),

    #[error("{0}")]
    Other(String),
}
