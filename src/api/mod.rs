//! HTTP client module for the Lichess API.
//!
//! Provides `LichessClient` for authenticating against the login endpoint.
//! Authentication yields an opaque session cookie delivered via the
//! `set-cookie` response header.

pub mod client;
pub mod error;

pub use client::LichessClient;
pub use error::ApiError;
