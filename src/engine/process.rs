//! Local-process adapter for the UCI capability interface.
//!
//! Spawns the engine executable with piped stdin/stdout and speaks the
//! line-oriented UCI protocol over them. The engine's stderr is inherited
//! so its diagnostics stay visible.

use std::path::Path;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tracing::{debug, trace};

use super::{EngineError, Position, SearchResult, UciEngine};

/// Handle to a running UCI engine process.
pub struct UciProcess {
    child: Child,
    stdin: ChildStdin,
    stdout: Lines<BufReader<ChildStdout>>,
    name: Option<String>,
}

impl UciProcess {
    /// Spawn the engine executable at `path`
    pub fn spawn(path: &Path) -> Result<Self, EngineError> {
        let mut child = Command::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(EngineError::Spawn)?;

        let stdin = child.stdin.take().ok_or_else(|| {
            EngineError::Protocol("engine process has no stdin handle".to_string())
        })?;
        let stdout = child.stdout.take().ok_or_else(|| {
            EngineError::Protocol("engine process has no stdout handle".to_string())
        })?;

        debug!(path = %path.display(), "Engine process spawned");

        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout).lines(),
            name: None,
        })
    }

    /// Engine name from the `id name` line of the handshake, if seen
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Send `quit` and wait for the process to exit
    pub async fn quit(mut self) -> Result<(), EngineError> {
        self.send("quit").await?;
        self.child.wait().await?;
        Ok(())
    }

    async fn send(&mut self, command: &str) -> Result<(), EngineError> {
        trace!(command, "-> engine");
        self.stdin.write_all(command.as_bytes()).await?;
        self.stdin.write_all(b"\n").await?;
        self.stdin.flush().await?;
        Ok(())
    }

    async fn read_line(&mut self) -> Result<String, EngineError> {
        let line = self.stdout.next_line().await?.ok_or(EngineError::Closed)?;
        trace!(line = line.as_str(), "<- engine");
        Ok(line)
    }

    /// Read lines until one matches `expected`, ignoring everything else
    /// (engines interleave `id`, `option`, and `info` lines freely).
    async fn wait_for(&mut self, expected: &str) -> Result<(), EngineError> {
        loop {
            let line = self.read_line().await?;
            let line = line.trim();
            if line == expected {
                return Ok(());
            }
            if let Some(name) = line.strip_prefix("id name ") {
                self.name = Some(name.to_string());
            }
        }
    }
}

impl UciEngine for UciProcess {
    async fn init(&mut self) -> Result<(), EngineError> {
        self.send("uci").await?;
        self.wait_for("uciok").await?;
        debug!(name = self.name.as_deref().unwrap_or("<unidentified>"), "Engine initialized");
        Ok(())
    }

    async fn is_ready(&mut self) -> Result<(), EngineError> {
        self.send("isready").await?;
        self.wait_for("readyok").await
    }

    async fn set_position(&mut self, position: &Position) -> Result<(), EngineError> {
        self.send(&format!("position {}", position.to_uci())).await
    }

    async fn go(&mut self, movetime_ms: u64) -> Result<SearchResult, EngineError> {
        self.send(&format!("go movetime {}", movetime_ms)).await?;

        loop {
            let line = self.read_line().await?;
            let line = line.trim();
            if !line.starts_with("bestmove") {
                continue;
            }

            let mut parts = line.split_whitespace();
            parts.next(); // "bestmove"
            let best_move = match parts.next() {
                None | Some("(none)") => return Err(EngineError::NoMove),
                Some(mv) => mv.to_string(),
            };
            let ponder = match (parts.next(), parts.next()) {
                (Some("ponder"), Some(mv)) => Some(mv.to_string()),
                _ => None,
            };

            return Ok(SearchResult { best_move, ponder });
        }
    }
}

impl Drop for UciProcess {
    fn drop(&mut self) {
        // Best effort; `quit()` is the polite path
        let _ = self.child.start_kill();
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    use super::*;

    /// A shell script standing in for a real engine
    const STUB_ENGINE: &str = r#"#!/bin/sh
while read line; do
  case "$line" in
    uci)
      echo "id name StubEngine 1.0"
      echo "option name Hash type spin default 16 min 1 max 1024"
      echo "uciok"
      ;;
    isready) echo "readyok" ;;
    go*)
      echo "info depth 1 score cp 13 pv e2e4"
      echo "bestmove e2e4 ponder e7e5"
      ;;
    quit) exit 0 ;;
  esac
done
"#;

    struct StubScript(PathBuf);

    impl StubScript {
        fn create(name: &str, contents: &str) -> Self {
            let path = std::env::temp_dir()
                .join(format!("uci-stub-{}-{}.sh", name, std::process::id()));
            fs::write(&path, contents).expect("failed to write stub engine");
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("failed to chmod stub engine");
            Self(path)
        }
    }

    impl Drop for StubScript {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[tokio::test]
    async fn test_handshake_position_and_search() {
        let script = StubScript::create("full", STUB_ENGINE);
        let mut engine = UciProcess::spawn(&script.0).expect("failed to spawn stub");

        engine.init().await.expect("init should reach uciok");
        assert_eq!(engine.name(), Some("StubEngine 1.0"));

        engine.is_ready().await.expect("isready should reach readyok");
        engine
            .set_position(&Position::Startpos)
            .await
            .expect("position should be accepted");

        let result = engine.go(100).await.expect("go should yield a bestmove");
        assert_eq!(
            result,
            SearchResult {
                best_move: "e2e4".to_string(),
                ponder: Some("e7e5".to_string()),
            }
        );

        engine.quit().await.expect("quit should terminate the stub");
    }

    #[tokio::test]
    async fn test_bestmove_none_is_an_error() {
        let stub = r#"#!/bin/sh
while read line; do
  case "$line" in
    uci) echo "uciok" ;;
    go*) echo "bestmove (none)" ;;
    quit) exit 0 ;;
  esac
done
"#;
        let script = StubScript::create("none", stub);
        let mut engine = UciProcess::spawn(&script.0).expect("failed to spawn stub");

        engine.init().await.expect("init should reach uciok");
        let err = engine.go(100).await.expect_err("go must fail");
        assert!(matches!(err, EngineError::NoMove));
    }

    #[tokio::test]
    async fn test_closed_stdout_surfaces_as_error() {
        let stub = "#!/bin/sh\nexit 0\n";
        let script = StubScript::create("exit", stub);
        let mut engine = UciProcess::spawn(&script.0).expect("failed to spawn stub");

        let err = engine.init().await.expect_err("init must fail");
        assert!(matches!(err, EngineError::Closed));
    }

    #[test]
    fn test_position_rendering() {
        assert_eq!(Position::Startpos.to_uci(), "startpos");
        assert_eq!(
            Position::Fen("8/8/8/8/8/8/8/K1k5 w - - 0 1".to_string()).to_uci(),
            "fen 8/8/8/8/8/8/8/K1k5 w - - 0 1"
        );
    }
}
