//! Move suggestions: an external UCI engine process, or a random legal move.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use chess_kit::perft::expanded_moves;
use chess_kit::{Game, UciMove, parse_bestmove, position_command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info, trace, warn};

use crate::config::EngineConfig;

/// Extra time allowed on top of the requested move time before giving up.
const RESPONSE_GRACE: Duration = Duration::from_secs(5);
const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything that can propose a move for the side to move.
pub trait MoveSuggester {
    fn name(&self) -> &str;

    /// `Ok(None)` when the position has no legal move.
    fn suggest(&mut self, game: &Game) -> anyhow::Result<Option<UciMove>>;
}

/// Picks uniformly among all legal moves, promotions spelled out.
pub struct RandomSuggester {
    rng: StdRng,
}

impl RandomSuggester {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSuggester {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSuggester for RandomSuggester {
    fn name(&self) -> &str {
        "random"
    }

    fn suggest(&mut self, game: &Game) -> anyhow::Result<Option<UciMove>> {
        let moves = expanded_moves(game);
        Ok(moves
            .choose(&mut self.rng)
            .map(|&(from, to, promotion)| UciMove {
                from,
                to,
                promotion,
            }))
    }
}

/// Messages from the engine reader thread
#[derive(Debug)]
enum EngineEvent {
    Output(String),
    Exited,
}

/// A UCI engine running as a child process.
pub struct UciEngine {
    name: String,
    process: Child,
    stdin: ChildStdin,
    events: Receiver<EngineEvent>,
    move_time: Duration,
}

impl UciEngine {
    /// Starts `program` and completes the `uci` / `isready` handshake.
    pub fn spawn(program: &str, args: &[String], move_time_ms: u64) -> anyhow::Result<Self> {
        let mut process = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to start engine {program:?}"))?;
        let stdin = process.stdin.take().context("engine stdin unavailable")?;
        let stdout = process.stdout.take().context("engine stdout unavailable")?;

        let (tx, events) = mpsc::channel();
        thread::spawn(move || {
            for line in BufReader::new(stdout).lines() {
                let Ok(line) = line else { break };
                if tx.send(EngineEvent::Output(line)).is_err() {
                    return;
                }
            }
            let _ = tx.send(EngineEvent::Exited);
        });

        let mut engine = Self {
            name: program.to_string(),
            process,
            stdin,
            events,
            move_time: Duration::from_millis(move_time_ms),
        };
        engine.send("uci")?;
        engine.wait_for("uciok", HANDSHAKE_TIMEOUT)?;
        engine.send("isready")?;
        engine.wait_for("readyok", HANDSHAKE_TIMEOUT)?;
        info!(engine = %engine.name, "engine ready");
        Ok(engine)
    }

    fn send(&mut self, command: &str) -> anyhow::Result<()> {
        debug!(command, "to engine");
        writeln!(self.stdin, "{command}").context("engine stdin closed")?;
        self.stdin.flush().context("engine stdin closed")?;
        Ok(())
    }

    /// Reads lines until one starts with `prefix` and returns it.
    fn wait_for(&mut self, prefix: &str, timeout: Duration) -> anyhow::Result<String> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.events.recv_timeout(remaining) {
                Ok(EngineEvent::Output(line)) => {
                    trace!(line = %line, "from engine");
                    if let Some(name) = line.strip_prefix("id name ") {
                        self.name = name.trim().to_string();
                    }
                    if line.starts_with(prefix) {
                        return Ok(line);
                    }
                }
                Ok(EngineEvent::Exited) | Err(RecvTimeoutError::Disconnected) => {
                    bail!("engine {} exited while waiting for {prefix}", self.name)
                }
                Err(RecvTimeoutError::Timeout) => {
                    bail!("engine {} did not answer {prefix} in time", self.name)
                }
            }
        }
    }
}

impl MoveSuggester for UciEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn suggest(&mut self, game: &Game) -> anyhow::Result<Option<UciMove>> {
        self.send(&position_command(game))?;
        self.send(&format!("go movetime {}", self.move_time.as_millis()))?;
        let line = self.wait_for("bestmove", self.move_time + RESPONSE_GRACE)?;
        let mv = parse_bestmove(game.board(), &line)
            .with_context(|| format!("engine {} sent {line:?}", self.name))?;
        Ok(mv)
    }
}

impl Drop for UciEngine {
    fn drop(&mut self) {
        let _ = self.send("quit");
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}

/// The configured engine, or the random suggester when none is configured
/// or it fails to start.
pub fn suggester_from_config(config: &EngineConfig) -> Box<dyn MoveSuggester> {
    let Some(path) = config.path.as_deref() else {
        return Box::new(RandomSuggester::new());
    };
    match UciEngine::spawn(path, &config.args, config.move_time_ms) {
        Ok(engine) => Box::new(engine),
        Err(e) => {
            warn!("engine unavailable, using random hints: {e:#}");
            Box::new(RandomSuggester::new())
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
