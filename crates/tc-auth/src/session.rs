//! Session types.

use serde::{Deserialize, Serialize};

/// Identity blob returned by the auth endpoints alongside the token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Bearer token plus the user identity it was issued for.
///
/// Created on successful login/registration, persisted until explicit
/// logout. There is no refresh or expiry handling; an invalid token simply
/// fails the next authenticated call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    /// Absent when the token came from the environment override.
    #[serde(default)]
    pub user: Option<UserProfile>,
}

impl Session {
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.email.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn session_roundtrips_through_json() {
        let session = Session {
            access_token: "tok_abc".into(),
            user: Some(UserProfile {
                id: Some(7),
                email: Some("user@example.com".into()),
            }),
        };
        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
        assert_eq!(parsed.email(), Some("user@example.com"));
    }

    #[test]
    fn user_blob_is_optional() {
        let parsed: Session = serde_json::from_str(r#"{"access_token": "tok"}"#).unwrap();
        assert_eq!(parsed.user, None);
        assert_eq!(parsed.email(), None);
    }
}
