//! Chess rules core.
//!
//! Board and coordinates, a small algebra of movement patterns that expands
//! into destination paths, king-safety filtering, game-state detection and
//! FEN. There is no search or evaluation here.

pub mod board;
pub mod coordinate;
pub mod error;
pub mod fen;
pub mod game;
pub mod game_state;
pub mod history;
pub mod movement;
pub mod path;
pub mod pattern;
pub mod perft;
pub mod requirement;
pub mod types;
pub mod uci;

pub use board::*;
pub use coordinate::*;
pub use error::*;
pub use fen::START_FEN;
pub use game::*;
pub use game_state::*;
pub use history::*;
pub use movement::*;
pub use path::*;
pub use pattern::PatternRule;
pub use perft::perft;
pub use requirement::*;
pub use types::*;
pub use uci::*;
