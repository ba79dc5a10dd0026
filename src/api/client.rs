//! Session client for the Lichess HTTP API.
//!
//! This module provides `LichessClient`, which performs credential-based
//! login against the Lichess login endpoint and retains the resulting
//! session cookie in memory.

use anyhow::Result;
use chrono::Utc;
use reqwest::{header, Client};
use tracing::info;

use crate::auth::{Credentials, Session, SessionData};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Versioned response format requested from the login endpoint
const ACCEPT_HEADER: &str = "application/vnd.lichess.v1+json";

/// HTTP request timeout in seconds.
/// 30s allows for slow responses while failing fast enough to be useful.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the Lichess API.
///
/// Holds the credentials supplied at construction and, after a successful
/// `login`, the session cookie. There is no retry, no refresh, and no
/// support for concurrent in-flight logins.
pub struct LichessClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
    session: Session,
}

impl LichessClient {
    /// Create a new client for the given base URL.
    ///
    /// Production callers pass the configured Lichess URL; tests point this
    /// at a mock server.
    pub fn with_base_url(credentials: Credentials, base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            session: Session::new(),
        })
    }

    /// Authenticate against the login endpoint and store the session cookie.
    ///
    /// Fails with `ApiError::CredentialsNotSet` before any network I/O when
    /// either credential field is empty. On success the first
    /// semicolon-delimited token of the `set-cookie` response header becomes
    /// the session cookie; repeated logins overwrite it.
    pub async fn login(&mut self) -> Result<()> {
        if !self.credentials.is_complete() {
            return Err(ApiError::CredentialsNotSet.into());
        }

        let url = format!("{}/login", self.base_url);

        let body = serde_json::json!({
            "username": self.credentials.username,
            "password": self.credentials.password(),
        });

        let response = self
            .client
            .post(&url)
            .header(header::ACCEPT, ACCEPT_HEADER)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::Network)?;

        let response = Self::check_response(response).await?;

        let cookie = Self::extract_session_cookie(&response)?;

        self.session.update(SessionData {
            cookie,
            username: self.credentials.username.clone(),
            created_at: Utc::now(),
        });

        info!(username = %self.credentials.username, "Login successful");
        Ok(())
    }

    /// Get the stored session cookie, if a login has succeeded
    pub fn session_cookie(&self) -> Option<&str> {
        self.session.cookie()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Pull the session token out of the `set-cookie` header: everything up
    /// to (excluding) the first `;`.
    fn extract_session_cookie(response: &reqwest::Response) -> Result<String, ApiError> {
        let header = response
            .headers()
            .get(header::SET_COOKIE)
            .ok_or(ApiError::MissingSessionCookie)?;

        let value = header.to_str().map_err(|_| {
            ApiError::InvalidResponse("set-cookie header is not valid UTF-8".to_string())
        })?;

        let cookie = value.split(';').next().unwrap_or(value).trim();
        if cookie.is_empty() {
            return Err(ApiError::MissingSessionCookie);
        }
        Ok(cookie.to_string())
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }
}
