//! End-of-game detection, evaluated on demand against a game snapshot.

use std::fmt;

use crate::game::Game;
use crate::history::History;
use crate::movement::{has_legal_move, is_in_check};
use crate::types::*;

/// Positions needed on the board for threefold repetition.
pub const REPETITION_LIMIT: usize = 3;
/// Half-moves without a pawn move or capture before the fifty-move draw.
pub const FIFTY_MOVE_HALF_MOVES: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    ThreefoldRepetition,
    FiftyMoveRule,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DrawReason::Stalemate => "stalemate",
            DrawReason::InsufficientMaterial => "insufficient material",
            DrawReason::ThreefoldRepetition => "threefold repetition",
            DrawReason::FiftyMoveRule => "fifty-move rule",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ongoing,
    /// The side to move is in check but has a way out.
    Check,
    Checkmate { winner: Color },
    Draw(DrawReason),
}

impl Status {
    pub fn is_over(self) -> bool {
        matches!(self, Status::Checkmate { .. } | Status::Draw(_))
    }
}

pub struct GameState<'a> {
    game: &'a Game,
    history: &'a History,
}

impl<'a> GameState<'a> {
    pub fn new(game: &'a Game, history: &'a History) -> Self {
        Self { game, history }
    }

    pub fn is_check(&self) -> bool {
        is_in_check(self.game.board(), self.game.current_player())
    }

    fn can_move(&self) -> bool {
        has_legal_move(self.game.board(), self.game.current_player())
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !self.can_move()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !self.can_move()
    }

    pub fn is_threefold_repetition(&self) -> bool {
        self.history.occurrences(self.game) >= REPETITION_LIMIT
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.game.half_move_clock() >= FIFTY_MOVE_HALF_MOVES
    }

    /// Only looked at with four or fewer pieces left: K v K, K v K+B,
    /// K v K+N, and K+B v K+B with both bishops on the same square color.
    pub fn is_insufficient_material(&self) -> bool {
        let board = self.game.board();
        if board.piece_count() > 4 {
            return false;
        }
        let minors: Vec<_> = board
            .pieces()
            .filter(|(_, p)| p.kind != PieceKind::King)
            .collect();
        match minors.as_slice() {
            [] => true,
            [(_, p)] => matches!(p.kind, PieceKind::Bishop | PieceKind::Knight),
            [(a, p), (b, q)] => {
                p.kind == PieceKind::Bishop
                    && q.kind == PieceKind::Bishop
                    && p.color != q.color
                    && a.parity() == b.parity()
            }
            _ => false,
        }
    }

    pub fn draw_reason(&self) -> Option<DrawReason> {
        if self.is_stalemate() {
            Some(DrawReason::Stalemate)
        } else if self.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else if self.is_threefold_repetition() {
            Some(DrawReason::ThreefoldRepetition)
        } else if self.is_fifty_move_draw() {
            Some(DrawReason::FiftyMoveRule)
        } else {
            None
        }
    }

    pub fn is_draw(&self) -> bool {
        self.draw_reason().is_some()
    }

    pub fn status(&self) -> Status {
        let check = self.is_check();
        let can_move = self.can_move();
        if check && !can_move {
            return Status::Checkmate {
                winner: self.game.current_player().other(),
            };
        }
        if !check && !can_move {
            return Status::Draw(DrawReason::Stalemate);
        }
        if self.is_insufficient_material() {
            Status::Draw(DrawReason::InsufficientMaterial)
        } else if self.is_threefold_repetition() {
            Status::Draw(DrawReason::ThreefoldRepetition)
        } else if self.is_fifty_move_draw() {
            Status::Draw(DrawReason::FiftyMoveRule)
        } else if check {
            Status::Check
        } else {
            Status::Ongoing
        }
    }
}

#[cfg(test)]
#[path = "game_state_tests.rs"]
mod game_state_tests;
