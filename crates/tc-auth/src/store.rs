//! Durable session storage.
//!
//! Sessions are stored in the OS keychain when available, with a file
//! fallback under `~/.trustcheck/`. An environment variable tier
//! (`TRUSTCHECK_AUTH__TOKEN`) lets CI inject a bare token without touching
//! either. The store is an explicit injected object with read/write
//! accessors and a `tokio::sync::watch` channel, so consumers can observe
//! session changes instead of relying on process restarts.

use std::fs;
use std::path::PathBuf;

use tokio::sync::watch;

use crate::error::AuthError;
use crate::session::Session;

const DEFAULT_KEYRING_SERVICE: &str = "trustcheck-cli";
const KEYRING_USER: &str = "session";
const SESSION_FILE_NAME: &str = "session.json";
const TOKEN_ENV_VAR: &str = "TRUSTCHECK_AUTH__TOKEN";

/// Returns the keyring service name.
///
/// Defaults to `"trustcheck-cli"`. Override via `TRUSTCHECK_KEYRING_SERVICE`
/// for testing to avoid touching production credentials.
fn keyring_service() -> String {
    std::env::var("TRUSTCHECK_KEYRING_SERVICE")
        .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Session persistence with change notification.
pub struct SessionStore {
    service: String,
    path: PathBuf,
    use_keyring: bool,
    changes: watch::Sender<Option<Session>>,
}

impl SessionStore {
    /// Store at the default location (`~/.trustcheck/session.json` plus the
    /// OS keychain).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStoreError` if the home directory cannot
    /// be resolved.
    pub fn new() -> Result<Self, AuthError> {
        let path = dirs::home_dir()
            .map(|h| h.join(".trustcheck").join(SESSION_FILE_NAME))
            .ok_or_else(|| {
                AuthError::SessionStoreError(
                    "home directory not found — cannot store session".into(),
                )
            })?;
        Ok(Self::at(path, true))
    }

    /// File-only store at an explicit path. Used by tests and embedders that
    /// must not touch the OS keychain.
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self::at(path, false)
    }

    fn at(path: PathBuf, use_keyring: bool) -> Self {
        let store = Self {
            service: keyring_service(),
            path,
            use_keyring,
            changes: watch::Sender::new(None),
        };
        let initial = store.load();
        store.changes.send_replace(initial);
        store
    }

    /// Current session. Priority: keyring → `TRUSTCHECK_AUTH__TOKEN` env →
    /// session file.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.load()
    }

    /// Current session, or the not-authenticated error callers surface
    /// before attempting any network call.
    pub fn require(&self) -> Result<Session, AuthError> {
        self.load().ok_or(AuthError::NotAuthenticated)
    }

    /// Persist a session. Falls back to the file if the keyring is
    /// unavailable.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStoreError` if both keyring and file
    /// storage fail.
    pub fn store(&self, session: &Session) -> Result<(), AuthError> {
        let payload = serde_json::to_string(session)
            .map_err(|e| AuthError::SessionStoreError(format!("serialize session: {e}")))?;

        let stored = if self.use_keyring {
            match keyring::Entry::new(&self.service, KEYRING_USER) {
                Ok(entry) => match entry.set_password(&payload) {
                    Ok(()) => Ok(()),
                    Err(error) => {
                        tracing::warn!(%error, "keyring store failed; falling back to file");
                        self.store_file(&payload)
                    }
                },
                Err(error) => {
                    tracing::warn!(%error, "keyring unavailable; falling back to file");
                    self.store_file(&payload)
                }
            }
        } else {
            self.store_file(&payload)
        };

        stored?;
        self.changes.send_replace(Some(session.clone()));
        Ok(())
    }

    /// Delete the stored session from keyring and file.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStoreError` if the session file cannot be
    /// removed.
    pub fn clear(&self) -> Result<(), AuthError> {
        // Delete from keyring (ignore errors; may not exist)
        if self.use_keyring
            && let Ok(entry) = keyring::Entry::new(&self.service, KEYRING_USER)
        {
            let _ = entry.delete_credential();
        }

        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                AuthError::SessionStoreError(format!(
                    "failed to delete {}: {e}",
                    self.path.display()
                ))
            })?;
        }

        self.changes.send_replace(None);
        Ok(())
    }

    /// Watch for session changes (login, logout).
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.changes.subscribe()
    }

    /// Detect which tier the current session came from (for status display).
    #[must_use]
    pub fn token_source(&self) -> Option<&'static str> {
        if self.use_keyring && self.load_keyring().is_some() {
            return Some("keyring");
        }
        if load_env_token().is_some() {
            return Some("env");
        }
        if self.load_file().is_some() {
            return Some("file");
        }
        None
    }

    // --- Private helpers ---

    fn load(&self) -> Option<Session> {
        if self.use_keyring
            && let Some(session) = self.load_keyring()
        {
            return Some(session);
        }
        if let Some(token) = load_env_token() {
            return Some(Session {
                access_token: token,
                user: None,
            });
        }
        self.load_file()
    }

    fn load_keyring(&self) -> Option<Session> {
        let entry = keyring::Entry::new(&self.service, KEYRING_USER).ok()?;
        let payload = entry.get_password().ok().filter(|p| !p.is_empty())?;
        parse_session(&payload)
    }

    fn load_file(&self) -> Option<Session> {
        let payload = fs::read_to_string(&self.path)
            .ok()
            .filter(|s| !s.trim().is_empty())?;
        parse_session(&payload)
    }

    fn store_file(&self, payload: &str) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::SessionStoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(&self.path, payload).map_err(|e| {
            AuthError::SessionStoreError(format!("write {}: {e}", self.path.display()))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::SessionStoreError(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }
}

fn load_env_token() -> Option<String> {
    std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty())
}

fn parse_session(payload: &str) -> Option<Session> {
    match serde_json::from_str(payload) {
        Ok(session) => Some(session),
        Err(error) => {
            tracing::warn!(%error, "stored session is unreadable; treating as logged out");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::session::UserProfile;

    fn sample_session() -> Session {
        Session {
            access_token: "tok_abc123".into(),
            user: Some(UserProfile {
                id: Some(1),
                email: Some("user@example.com".into()),
            }),
        }
    }

    #[test]
    fn file_store_load_clear_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::with_path(tmp.path().join("session.json"));

        assert!(store.current().is_none());

        store.store(&sample_session()).expect("store");
        let loaded = store.current().expect("session present");
        assert_eq!(loaded.access_token, "tok_abc123");
        assert_eq!(loaded.email(), Some("user@example.com"));

        // Verify permissions on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(tmp.path().join("session.json"))
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "session file should be 0600");
        }

        store.clear().expect("clear");
        assert!(store.current().is_none());
        assert!(!tmp.path().join("session.json").exists());
    }

    #[test]
    fn require_fails_when_logged_out() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::with_path(tmp.path().join("session.json"));
        assert!(matches!(
            store.require(),
            Err(AuthError::NotAuthenticated)
        ));
    }

    #[test]
    fn subscribers_observe_login_and_logout() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::with_path(tmp.path().join("session.json"));
        let mut changes = store.subscribe();

        assert!(changes.borrow().is_none());

        store.store(&sample_session()).expect("store");
        assert!(changes.has_changed().expect("channel open"));
        assert_eq!(
            changes.borrow_and_update().as_ref().map(|s| s.access_token.clone()),
            Some("tok_abc123".to_string())
        );

        store.clear().expect("clear");
        assert!(changes.borrow_and_update().is_none());
    }

    #[test]
    fn unreadable_session_file_reads_as_logged_out() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session.json");
        fs::write(&path, "not json at all").expect("write");
        let store = SessionStore::with_path(path);
        assert!(store.current().is_none());
    }

    #[test]
    fn whitespace_only_file_reads_as_logged_out() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session.json");
        fs::write(&path, "   \n  ").expect("write");
        let store = SessionStore::with_path(path);
        assert!(store.current().is_none());
    }
}
