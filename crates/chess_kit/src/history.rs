use crate::fen::position_key;
use crate::game::Game;

/// Positions seen so far, oldest first, keyed by the first four FEN fields.
///
/// The game does not keep this itself; whoever drives the game records each
/// position it wants counted for repetition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    keys: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// History seeded with the game's current position.
    pub fn starting_at(game: &Game) -> Self {
        let mut h = Self::new();
        h.record(game);
        h
    }

    pub fn record(&mut self, game: &Game) {
        self.keys.push(position_key(game));
    }

    /// How many recorded positions match the game's current one.
    pub fn occurrences(&self, game: &Game) -> usize {
        let key = position_key(game);
        self.keys.iter().filter(|k| **k == key).count()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}
