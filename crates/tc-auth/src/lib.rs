//! # tc-auth
//!
//! Credential authentication for the TrustCheck CLI.
//!
//! Provides login/registration against the backend's `/auth/*` endpoints,
//! durable session storage (OS keychain with env and file tiers, `keyring` +
//! `dirs`), and an observable [`SessionStore`] so session changes propagate
//! without a restart.

pub mod api;
pub mod error;
pub mod session;
pub mod store;

pub use api::CredentialsApi;
pub use error::AuthError;
pub use session::{Session, UserProfile};
pub use store::SessionStore;
