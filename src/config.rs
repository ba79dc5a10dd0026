//! Runtime configuration.
//!
//! All configuration comes from the process environment (optionally seeded
//! from a `.env` file by the binary). Credentials are never stored in source
//! or on disk.

use std::path::PathBuf;

use crate::auth::Credentials;

/// Default base URL for the Lichess API
const DEFAULT_BASE_URL: &str = "https://lichess.org";

/// Default engine search budget in milliseconds
const DEFAULT_MOVETIME_MS: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub password: String,
    pub base_url: String,
    pub engine_path: Option<PathBuf>,
    pub engine_movetime_ms: u64,
}

impl Config {
    /// Build the configuration from the environment.
    ///
    /// Missing credentials are allowed here; `login()` rejects them before
    /// any network call is made.
    pub fn from_env() -> Self {
        let username = std::env::var("LICHESS_USERNAME").unwrap_or_default();
        let password = std::env::var("LICHESS_PASSWORD").unwrap_or_default();
        let base_url =
            std::env::var("LICHESS_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let engine_path = std::env::var("ENGINE_PATH").ok().map(PathBuf::from);
        let engine_movetime_ms = std::env::var("ENGINE_MOVETIME_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MOVETIME_MS);

        Self {
            username,
            password,
            base_url,
            engine_path,
            engine_movetime_ms,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.username, &self.password)
    }
}
