//! Movement requirements: boolean predicates that gate each candidate step.
//!
//! Predicates never fail. An unmet requirement simply prunes the candidate,
//! and every board read treats off-board squares as empty.

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::movement::{attackers_of, castling_rook_square};
use crate::types::*;

/// One candidate step during path expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Side the paths are generated for.
    pub color: Color,
    /// Square of the piece whose paths are being generated.
    pub root: Coordinate,
    /// Square the walk is extending from (equals `root` for fixed offsets).
    pub origin: Coordinate,
    /// Candidate destination.
    pub target: Coordinate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    InsideBoard,
    /// Target is empty or holds an enemy.
    NoFriendlyCapture,
    /// The square being extended from is empty or friendly; a ray that just
    /// landed on an enemy goes no further.
    OriginNotAlreadyCaptured,
    TargetEmpty,
    TargetIsEnemy,
    /// The square beside `origin` on the target's file holds a rushed enemy pawn.
    TargetIsFlankKill,
    OriginPieceUnmoved,
    /// Every square strictly between origin and target is empty.
    EmptyBetween,
    CastlingRookUnmoved(CastleSide),
    EmptyBetweenKingAndRook(CastleSide),
    /// Neither the king's square, the squares it crosses, nor its destination
    /// are attacked.
    CastlingPathSafe,
}

impl Requirement {
    pub fn check(&self, step: Step, board: &Board) -> bool {
        let Step {
            color,
            root,
            origin,
            target,
        } = step;
        match *self {
            Requirement::InsideBoard => board.contains(target),
            Requirement::NoFriendlyCapture => board.get(target).is_none_or(|p| p.color != color),
            Requirement::OriginNotAlreadyCaptured => {
                board.get(origin).is_none_or(|p| p.color == color)
            }
            Requirement::TargetEmpty => board.is_empty(target),
            Requirement::TargetIsEnemy => board.get(target).is_some_and(|p| p.color != color),
            Requirement::TargetIsFlankKill => {
                let flank = Coordinate::new(target.x, origin.y);
                board.get(flank).is_some_and(|p| {
                    p.is(color.other(), PieceKind::Pawn) && p.status == MoveStatus::Rushed
                })
            }
            Requirement::OriginPieceUnmoved => board.get(origin).is_some_and(|p| p.is_unmoved()),
            Requirement::EmptyBetween => origin
                .squares_between(target)
                .into_iter()
                .all(|c| board.is_empty(c)),
            Requirement::CastlingRookUnmoved(side) => {
                let rook_sq = castling_rook_square(board, root, side);
                board
                    .get(rook_sq)
                    .is_some_and(|p| p.is(color, PieceKind::Rook) && p.is_unmoved())
            }
            Requirement::EmptyBetweenKingAndRook(side) => {
                let rook_sq = castling_rook_square(board, root, side);
                root.squares_between(rook_sq)
                    .into_iter()
                    .all(|c| board.is_empty(c))
            }
            Requirement::CastlingPathSafe => {
                let mut squares = vec![root];
                squares.extend(root.squares_between(target));
                squares.push(target);
                squares
                    .into_iter()
                    .all(|sq| attackers_of(board, sq, color).is_empty())
            }
        }
    }

    /// All requirements in order, short-circuiting on the first failure.
    pub fn all(requirements: &[Requirement], step: Step, board: &Board) -> bool {
        requirements.iter().all(|r| r.check(step, board))
    }
}

#[cfg(test)]
#[path = "requirement_tests.rs"]
mod requirement_tests;
