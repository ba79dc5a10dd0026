use std::fmt;

/// Login credentials, supplied once at client construction.
///
/// Empty values are accepted here; the client refuses to log in with them.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Both fields non-empty
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Manual Debug so the password never ends up in logs
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
    fn test_is_complete() {
        assert!(Credentials::new("yureka", "hunter2").is_complete());
        assert!(!Credentials::new("", "hunter2").is_complete());
        assert!(!Credentials::new("yureka", "").is_complete());
        assert!(!Credentials::new("", "").is_complete());
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("yureka", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("yureka"));
        assert!(!debug.contains("hunter2"));
    }
}
