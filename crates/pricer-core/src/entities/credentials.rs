use std::fmt;

use crate::errors::CoreError;

/// Username and password for a single login call.
///
/// Never serialized and never persisted. `Debug` hides the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Build credentials, rejecting blank fields.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if either field is empty or
    /// whitespace-only.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let username = username.into();
        let password = password.into();
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(CoreError::invalid(
                "username and password cannot be null or empty",
            ));
        }
        Ok(Self { username, password })
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_username() {
        assert!(Credentials::new("  ", "pw").is_err());
    }

    #[test]
    fn rejects_empty_password() {
        let err = Credentials::new("emilys", "").unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }

    #[test]
    fn debug_hides_password() {
        let creds = Credentials::new("emilys", "hunter2").unwrap();
        let debug = format!("{creds:?}");
        assert!(debug.contains("emilys"));
        assert!(!debug.contains("hunter2"));
    }
}
