use tracing::debug;

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::error::{ChessError, Result};
use crate::fen;
use crate::movement::{self, Applied};
use crate::path::Path;
use crate::types::*;

/// One game in progress: the board, whose turn it is and the move counters.
///
/// The only way to change a game is [`Game::make_move`] (or one of its
/// variants), which validates completely before touching anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Color,
    half_move_clock: u32,
    full_move_count: u32,
}

impl Game {
    /// Standard initial position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::standard_setup(),
            current_player: Color::White,
            half_move_clock: 0,
            full_move_count: 1,
        }
    }

    pub(crate) fn from_parts(
        board: Board,
        current_player: Color,
        half_move_clock: u32,
        full_move_count: u32,
    ) -> Self {
        Game {
            board,
            current_player,
            half_move_clock,
            full_move_count,
        }
    }

    pub fn from_fen(text: &str) -> Result<Self> {
        fen::parse(text)
    }

    pub fn to_fen(&self) -> String {
        fen::generate(self)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn current_player(&self) -> Color {
        self.current_player
    }
    pub fn half_move_clock(&self) -> u32 {
        self.half_move_clock
    }
    pub fn full_move_count(&self) -> u32 {
        self.full_move_count
    }

    pub fn legal_paths_for(&self, square: Coordinate) -> Result<Vec<Path>> {
        movement::legal_paths_for(&self.board, square)
    }

    /// Every legal `(from, to)` pair for the side to move.
    pub fn legal_moves(&self) -> Vec<(Coordinate, Coordinate)> {
        movement::legal_destinations(&self.board, self.current_player)
    }

    pub fn is_in_check(&self) -> bool {
        movement::is_in_check(&self.board, self.current_player)
    }

    pub fn make_move(&mut self, from: Coordinate, to: Coordinate) -> Result<Applied> {
        self.make_move_with_promotion(from, to, None)
    }

    /// Moves given in algebraic notation, e.g. `("E2", "E4")`.
    pub fn make_move_algebraic(&mut self, from: &str, to: &str) -> Result<Applied> {
        let from = self.board.coordinate(from)?;
        let to = self.board.coordinate(to)?;
        self.make_move(from, to)
    }

    /// `promotion` is only consulted when a pawn reaches its last rank and
    /// defaults to a queen.
    pub fn make_move_with_promotion(
        &mut self,
        from: Coordinate,
        to: Coordinate,
        promotion: Option<PieceKind>,
    ) -> Result<Applied> {
        self.validate(from, to)?;
        self.play(from, to, promotion)
    }

    fn validate(&self, from: Coordinate, to: Coordinate) -> Result<()> {
        let piece = self
            .board
            .lookup(from)?
            .ok_or_else(|| ChessError::illegal(from, to, "no piece on the origin square"))?;
        if let Some(target) = self.board.lookup(to)?
            && target.color == piece.color
        {
            return Err(ChessError::illegal(from, to, "target holds a piece of the same color"));
        }
        if piece.color != self.current_player {
            return Err(ChessError::illegal(
                from,
                to,
                format!("it is {}'s turn", self.current_player),
            ));
        }
        let reachable = movement::legal_paths_for(&self.board, from)?
            .iter()
            .any(|path| path.contains(&to));
        if !reachable {
            return Err(ChessError::illegal(from, to, "not a legal destination"));
        }
        Ok(())
    }

    /// Applies an already validated move and advances the counters.
    pub(crate) fn play(
        &mut self,
        from: Coordinate,
        to: Coordinate,
        promotion: Option<PieceKind>,
    ) -> Result<Applied> {
        let applied = movement::apply_move(&mut self.board, from, to, promotion)?;

        if applied.piece.kind == PieceKind::Pawn || applied.captured.is_some() {
            self.half_move_clock = 0;
        } else {
            self.half_move_clock = self.half_move_clock.saturating_add(1);
        }
        if self.current_player == Color::Black {
            self.full_move_count = self.full_move_count.saturating_add(1);
        }
        self.current_player = self.current_player.other();

        debug!(
            from = %from,
            to = %to,
            piece = ?applied.piece.kind,
            capture = applied.captured.is_some(),
            en_passant = applied.is_en_passant(),
            castle = applied.castle.is_some(),
            promotion = ?applied.promotion,
            "move applied"
        );
        Ok(applied)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
