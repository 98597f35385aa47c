use serde::{Deserialize, Serialize};
use std::fmt;

/// Authenticated identity returned by the login endpoint.
///
/// The core hands this to its caller and never keeps it; whoever holds the
/// session owns its lifetime (idle expiry, logout).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub image: String,
    pub access_token: String,
}

impl UserSession {
    /// "First Last", or the username when neither name is present.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

impl fmt::Debug for UserSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserSession")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("access_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN_FIXTURE: &str = r#"{
        "id": 1,
        "username": "emilys",
        "email": "emily.johnson@x.dummyjson.com",
        "firstName": "Emily",
        "lastName": "Johnson",
        "gender": "female",
        "image": "https://dummyjson.com/icon/emilys/128",
        "accessToken": "eyJhbGciOi.secret",
        "refreshToken": "ignored"
    }"#;

    #[test]
    fn parses_login_response() {
        let session: UserSession = serde_json::from_str(LOGIN_FIXTURE).unwrap();
        assert_eq!(session.id, 1);
        assert_eq!(session.first_name, "Emily");
        assert_eq!(session.access_token, "eyJhbGciOi.secret");
        assert_eq!(session.display_name(), "Emily Johnson");
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let session: UserSession =
            serde_json::from_str(r#"{"username": "kminchelle", "accessToken": "t"}"#).unwrap();
        assert_eq!(session.display_name(), "kminchelle");
    }

    #[test]
    fn debug_output_redacts_token() {
        let session: UserSession = serde_json::from_str(LOGIN_FIXTURE).unwrap();
        let debug = format!("{session:?}");
        assert!(debug.contains("emilys"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn missing_token_is_a_parse_error() {
        let result = serde_json::from_str::<UserSession>(r#"{"username": "emilys"}"#);
        assert!(result.is_err());
    }
}
