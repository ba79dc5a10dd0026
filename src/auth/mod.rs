//! Authentication primitives.
//!
//! This module provides:
//! - `Credentials`: the username/password pair supplied at construction
//! - `Session` / `SessionData`: the in-memory session cookie obtained
//!   from a successful login
//!
//! Nothing here touches disk; credentials come from the environment and
//! the session lives only as long as the client.

pub mod credentials;
pub mod session;

pub use credentials::Credentials;
pub use session::{Session, SessionData};
