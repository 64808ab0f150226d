//! Rules layer: which patterns each piece uses, which squares are attacked,
//! and which destinations survive the king-safety check.

use tracing::trace;

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::error::{ChessError, Result};
use crate::path::{Path, PathGenerator};
use crate::pattern::*;
use crate::types::*;

/// Which geometry of a piece is wanted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Everything the piece may do on its turn.
    Move,
    /// Squares the piece threatens. Pawns only capture diagonally here and
    /// kings never castle.
    Attack,
    /// Pawn captures of a rushed neighbour.
    EnPassant,
}

const PAWN_MOVES: &[PatternRule] = &[PAWN_ADVANCE, PAWN_RUSH, PAWN_CAPTURE, PAWN_EN_PASSANT];
const PAWN_ATTACKS: &[PatternRule] = &[PAWN_CAPTURE];
const PAWN_EN_PASSANTS: &[PatternRule] = &[PAWN_EN_PASSANT];
const KNIGHT: &[PatternRule] = &[KNIGHT_JUMP];
const BISHOP: &[PatternRule] = &[BISHOP_SLIDE];
const ROOK: &[PatternRule] = &[ROOK_SLIDE];
const QUEEN: &[PatternRule] = &[QUEEN_SLIDE];
const KING_MOVES: &[PatternRule] = &[KING_STEP, CASTLE_KING_SIDE, CASTLE_QUEEN_SIDE];
const KING_ATTACKS: &[PatternRule] = &[KING_STEP];

/// Static pattern table keyed by `(kind, mode)`.
pub fn patterns(kind: PieceKind, mode: Mode) -> &'static [PatternRule] {
    match (kind, mode) {
        (PieceKind::Pawn, Mode::Move) => PAWN_MOVES,
        (PieceKind::Pawn, Mode::Attack) => PAWN_ATTACKS,
        (PieceKind::Pawn, Mode::EnPassant) => PAWN_EN_PASSANTS,
        (_, Mode::EnPassant) => &[],
        (PieceKind::Knight, _) => KNIGHT,
        (PieceKind::Bishop, _) => BISHOP,
        (PieceKind::Rook, _) => ROOK,
        (PieceKind::Queen, _) => QUEEN,
        (PieceKind::King, Mode::Move) => KING_MOVES,
        (PieceKind::King, Mode::Attack) => KING_ATTACKS,
    }
}

/// Rank the given side's pieces start on.
pub fn home_rank(board: &Board, color: Color) -> i32 {
    match color {
        Color::White => 0,
        Color::Black => board.rows() - 1,
    }
}

/// Rank the given side's pawns start on.
pub fn pawn_rank(board: &Board, color: Color) -> i32 {
    home_rank(board, color) + color.forward()
}

/// Rank a pawn of `color` promotes on.
pub fn promotion_rank(board: &Board, color: Color) -> i32 {
    home_rank(board, color.other())
}

pub fn king_home(board: &Board, color: Color) -> Coordinate {
    Coordinate::new(board.columns() / 2, home_rank(board, color))
}

/// Corner square of the rook that castles with a king standing on `king`.
pub fn castling_rook_square(board: &Board, king: Coordinate, side: CastleSide) -> Coordinate {
    match side {
        CastleSide::King => Coordinate::new(board.columns() - 1, king.y),
        CastleSide::Queen => Coordinate::new(0, king.y),
    }
}

/// Raw paths of a hypothetical `color` `kind` standing on `square`.
pub fn pattern_paths(
    board: &Board,
    square: Coordinate,
    color: Color,
    kind: PieceKind,
    mode: Mode,
) -> Vec<Path> {
    PathGenerator::new(board).paths_for_rules(patterns(kind, mode), square, color)
}

/// Enemy pieces attacking `square` from the point of view of `color`.
///
/// Each kind's attack geometry is cast from `square` as if a `color` piece
/// of that kind stood there; a path whose last square holds an enemy of the
/// same kind found an attacker. Result is deduplicated in scan order.
pub fn attackers_of(board: &Board, square: Coordinate, color: Color) -> Vec<Coordinate> {
    let enemy = color.other();
    let mut out: Vec<Coordinate> = Vec::new();
    for kind in PieceKind::ALL {
        for path in pattern_paths(board, square, color, kind, Mode::Attack) {
            if let Some(&last) = path.last()
                && board.get(last).is_some_and(|p| p.is(enemy, kind))
                && !out.contains(&last)
            {
                out.push(last);
            }
        }
    }
    out.sort_by_key(|c| (c.y, c.x));
    out
}

pub fn king_square(board: &Board, color: Color) -> Option<Coordinate> {
    board.find(|_, p| p.is(color, PieceKind::King))
}

/// `false` when `color` has no king on the board.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match king_square(board, color) {
        Some(k) => !attackers_of(board, k, color).is_empty(),
        None => false,
    }
}

/// Plays `from -> to` on a throwaway copy and reports whether the mover's
/// king is left unattacked.
pub fn is_king_safe_after(board: &Board, from: Coordinate, to: Coordinate) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };
    let mut sim = board.clone();
    if apply_move(&mut sim, from, to, None).is_err() {
        return false;
    }
    match king_square(&sim, piece.color) {
        Some(k) => attackers_of(&sim, k, piece.color).is_empty(),
        None => true,
    }
}

/// Candidate paths of the piece on `square` before king-safety filtering.
pub fn raw_paths_for(board: &Board, square: Coordinate) -> Result<Vec<Path>> {
    match board.lookup(square)? {
        Some(p) => Ok(pattern_paths(board, square, p.color, p.kind, Mode::Move)),
        None => Ok(Vec::new()),
    }
}

/// Paths of the piece on `square` with every destination that would leave
/// its own king attacked removed. Paths emptied by the filter are dropped.
pub fn legal_paths_for(board: &Board, square: Coordinate) -> Result<Vec<Path>> {
    let raw = raw_paths_for(board, square)?;
    Ok(raw
        .into_iter()
        .map(|path| {
            path.into_iter()
                .filter(|&dest| {
                    let safe = is_king_safe_after(board, square, dest);
                    if !safe {
                        trace!(from = %square, to = %dest, "rejected: king left in check");
                    }
                    safe
                })
                .collect::<Path>()
        })
        .filter(|path| !path.is_empty())
        .collect())
}

/// Every legal `(from, to)` pair for `color`, in scan order of the movers.
pub fn legal_destinations(board: &Board, color: Color) -> Vec<(Coordinate, Coordinate)> {
    let mut out = Vec::new();
    for from in board.find_all(|_, p| p.color == color) {
        let Ok(paths) = legal_paths_for(board, from) else {
            continue;
        };
        for to in paths.into_iter().flatten() {
            if !out.contains(&(from, to)) {
                out.push((from, to));
            }
        }
    }
    out
}

/// Stops at the first legal move found.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board.find_all(|_, p| p.color == color).into_iter().any(|from| {
        legal_paths_for(board, from).is_ok_and(|paths| !paths.is_empty())
    })
}

/// A possible en passant capture: the rushed pawn on `flank` is taken by
/// moving to `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flank {
    pub flank: Coordinate,
    pub target: Coordinate,
}

pub fn en_passant_flanks_for(board: &Board, square: Coordinate) -> Result<Vec<Flank>> {
    let Some(piece) = board.lookup(square)? else {
        return Ok(Vec::new());
    };
    if piece.kind != PieceKind::Pawn {
        return Ok(Vec::new());
    }
    Ok(
        pattern_paths(board, square, piece.color, PieceKind::Pawn, Mode::EnPassant)
            .into_iter()
            .flatten()
            .map(|target| Flank {
                flank: Coordinate::new(target.x, square.y),
                target,
            })
            .collect(),
    )
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CastlingRights {
    pub king_side: bool,
    pub queen_side: bool,
}

impl CastlingRights {
    pub fn get(&self, side: CastleSide) -> bool {
        match side {
            CastleSide::King => self.king_side,
            CastleSide::Queen => self.queen_side,
        }
    }
}

/// A side may still castle when its king and that side's rook are both
/// unmoved on their home squares. Says nothing about the current position
/// allowing it.
pub fn castling_rights(board: &Board, color: Color) -> CastlingRights {
    let king = king_home(board, color);
    if !board
        .get(king)
        .is_some_and(|p| p.is(color, PieceKind::King) && p.is_unmoved())
    {
        return CastlingRights::default();
    }
    let rook_ready = |side| {
        board
            .get(castling_rook_square(board, king, side))
            .is_some_and(|p| p.is(color, PieceKind::Rook) && p.is_unmoved())
    };
    CastlingRights {
        king_side: rook_ready(CastleSide::King),
        queen_side: rook_ready(CastleSide::Queen),
    }
}

/// Board-level effects of one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Applied {
    pub from: Coordinate,
    pub to: Coordinate,
    /// The mover as it stood before the move.
    pub piece: Piece,
    /// Square and piece removed, which differs from `to` for en passant.
    pub captured: Option<(Coordinate, Piece)>,
    /// Rook relocation when the move castled.
    pub castle: Option<(Coordinate, Coordinate)>,
    pub promotion: Option<PieceKind>,
    pub rushed: bool,
}

impl Applied {
    pub fn is_en_passant(&self) -> bool {
        self.captured.is_some_and(|(sq, _)| sq != self.to)
    }
}

/// Performs `from -> to` on `board` without checking legality: moves the
/// piece, removes an en passant victim, brings the rook across when a king
/// steps two files, promotes (queen unless told otherwise), clears any
/// previous rushed pawn and sets the mover's new status.
///
/// Both squares are validated before anything changes.
pub fn apply_move(
    board: &mut Board,
    from: Coordinate,
    to: Coordinate,
    promotion: Option<PieceKind>,
) -> Result<Applied> {
    let piece = board
        .lookup(from)?
        .ok_or_else(|| ChessError::illegal(from, to, "no piece on the origin square"))?;
    board.lookup(to)?;

    for rushed in board.find_all(|_, p| p.status == MoveStatus::Rushed) {
        board.set_status(rushed, MoveStatus::Moved)?;
    }

    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let mut captured = None;

    if piece.kind == PieceKind::Pawn && dx != 0 && board.is_empty(to) {
        let flank = Coordinate::new(to.x, from.y);
        if let Some(victim) = board.get(flank)
            && victim.is(piece.color.other(), PieceKind::Pawn)
        {
            board.clear(flank)?;
            captured = Some((flank, victim));
        }
    }

    if let Some(victim) = board.relocate(from, to)? {
        captured = Some((to, victim));
    }

    let mut castle = None;
    if piece.kind == PieceKind::King && dy == 0 && dx.abs() == 2 {
        let side = if dx > 0 {
            CastleSide::King
        } else {
            CastleSide::Queen
        };
        let rook_from = castling_rook_square(board, from, side);
        let rook_to = from.offset(side.direction(), 0);
        if board
            .get(rook_from)
            .is_some_and(|p| p.is(piece.color, PieceKind::Rook))
        {
            board.relocate(rook_from, rook_to)?;
            board.set_status(rook_to, MoveStatus::Moved)?;
            castle = Some((rook_from, rook_to));
        }
    }

    let rushed = piece.kind == PieceKind::Pawn && dy.abs() == 2;
    board.set_status(
        to,
        if rushed {
            MoveStatus::Rushed
        } else {
            MoveStatus::Moved
        },
    )?;

    let mut promoted = None;
    if piece.kind == PieceKind::Pawn && to.y == promotion_rank(board, piece.color) {
        let kind = promotion
            .filter(|k| k.is_promotion_target())
            .unwrap_or(PieceKind::Queen);
        board.put(
            to,
            Piece::new(piece.color, kind).with_status(MoveStatus::Moved),
        );
        promoted = Some(kind);
    }

    Ok(Applied {
        from,
        to,
        piece,
        captured,
        castle,
        promotion: promoted,
        rushed,
    })
}

#[cfg(test)]
#[path = "movement_tests.rs"]
mod movement_tests;
