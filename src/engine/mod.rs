//! UCI engine capability interface.
//!
//! `UciEngine` models the exchange a UCI engine supports: initialization,
//! readiness check, position setup, and a timed search yielding a best move.
//! The only implementation is `UciProcess`, which drives a locally running
//! engine executable over stdin/stdout. Nothing here knows about the
//! Lichess session client.

// Allow dead code: FEN positions are part of the capability surface but the
// binary only searches from startpos
#![allow(dead_code)]

pub mod process;

use thiserror::Error;

pub use process::UciProcess;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to spawn engine process: {0}")]
    Spawn(std::io::Error),

    #[error("Engine I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Engine closed its output stream")]
    Closed,

    #[error("Engine returned no move")]
    NoMove,

    #[error("Engine protocol violation: {0}")]
    Protocol(String),
}

/// A position to hand the engine before searching
#[derive(Debug, Clone)]
pub enum Position {
    /// The standard starting position
    Startpos,
    /// An arbitrary position in Forsyth-Edwards Notation
    Fen(String),
}

impl Position {
    /// Render as the argument to the UCI `position` command
    pub(crate) fn to_uci(&self) -> String {
        match self {
            Position::Startpos => "startpos".to_string(),
            Position::Fen(fen) => format!("fen {}", fen),
        }
    }
}

/// Outcome of a `go` search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move in long algebraic notation, e.g. `e2e4`
    pub best_move: String,
    /// Move the engine would ponder on, when reported
    pub ponder: Option<String>,
}

/// The request/response surface of a UCI engine.
pub trait UciEngine {
    /// Perform the `uci`/`uciok` handshake
    async fn init(&mut self) -> Result<(), EngineError>;

    /// Block until the engine answers `readyok`
    async fn is_ready(&mut self) -> Result<(), EngineError>;

    /// Set the position to search from
    async fn set_position(&mut self, position: &Position) -> Result<(), EngineError>;

    /// Search for the given time budget and return the best move
    async fn go(&mut self, movetime_ms: u64) -> Result<SearchResult, EngineError>;
}
