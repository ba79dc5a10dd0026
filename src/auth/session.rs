use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Data captured from a successful login.
///
/// The cookie is opaque to us; Lichess issues it in the `set-cookie` response
/// header and expects it replayed on subsequent requests. No expiry or
/// refresh is tracked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub cookie: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// In-memory session holder.
///
/// Unset until a login succeeds. Repeated logins overwrite the previous
/// session (last write wins); there is no logout transition.
#[derive(Debug, Default)]
pub struct Session {
    data: Option<SessionData>,
}

impl Session {
    pub fn new() -> Self {
        Self { data: None }
    }

    /// Replace the session with new data
    pub fn update(&mut self, data: SessionData) {
        self.data = Some(data);
    }

    /// Get the session cookie if a login has succeeded
    pub fn cookie(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.cookie.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.data.is_some()
    }
}
