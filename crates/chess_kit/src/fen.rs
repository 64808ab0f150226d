//! Forsyth-Edwards Notation.
//!
//! Six space-separated fields: piece rows, side to move, castling rights,
//! en passant target, half-move clock and full-move count. Castling rights
//! and the en passant square are not stored on the game; they are read off
//! piece statuses when generating and written back into them when parsing.

use tracing::debug;

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::error::{ChessError, Result};
use crate::game::Game;
use crate::movement::{castling_rights, castling_rook_square, king_home, pawn_rank};
use crate::types::*;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub fn generate(game: &Game) -> String {
    format!(
        "{} {} {}",
        position_key(game),
        game.half_move_clock(),
        game.full_move_count()
    )
}

/// The first four fields: everything that identifies a position for
/// repetition purposes.
pub fn position_key(game: &Game) -> String {
    let board = game.board();
    format!(
        "{} {} {} {}",
        board.to_rows(),
        game.current_player().fen_char(),
        castling_field(board),
        en_passant_field(board)
    )
}

fn castling_letter(color: Color, side: CastleSide) -> char {
    let ch = match side {
        CastleSide::King => 'k',
        CastleSide::Queen => 'q',
    };
    match color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}

fn castling_field(board: &Board) -> String {
    let mut out = String::new();
    for color in [Color::White, Color::Black] {
        let rights = castling_rights(board, color);
        for side in CastleSide::BOTH {
            if rights.get(side) {
                out.push(castling_letter(color, side));
            }
        }
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

fn en_passant_field(board: &Board) -> String {
    board
        .pieces()
        .find(|(_, p)| p.kind == PieceKind::Pawn && p.status == MoveStatus::Rushed)
        .and_then(|(sq, p)| sq.offset(0, -p.color.forward()).to_algebraic())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_else(|| "-".to_string())
}

pub fn parse(text: &str) -> Result<Game> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(ChessError::MalformedFen(format!(
            "expected 6 fields, found {}",
            fields.len()
        )));
    }

    let mut board = Board::from_rows(fields[0], 8, 8)?;
    let side = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(ChessError::MalformedFen(format!(
                "side to move must be w or b, found {other:?}"
            )));
        }
    };

    settle_statuses(&mut board)?;
    apply_castling_field(&mut board, fields[2])?;
    apply_en_passant_field(&mut board, fields[3], side)?;

    let half_move_clock: u32 = fields[4].parse().map_err(|_| {
        ChessError::MalformedFen(format!("bad half-move clock {:?}", fields[4]))
    })?;
    let full_move_count: u32 = fields[5].parse().map_err(|_| {
        ChessError::MalformedFen(format!("bad full-move count {:?}", fields[5]))
    })?;

    debug!(fen = text, "parsed FEN");
    Ok(Game::from_parts(board, side, half_move_clock, full_move_count))
}

/// Pieces standing where they started stay unmoved; everything else has
/// moved. Pawns count from their own starting rank, kings from their home
/// square and rooks from the corners.
fn settle_statuses(board: &mut Board) -> Result<()> {
    let view: &Board = board;
    let moved: Vec<Coordinate> = view.find_all(|sq, p| {
        let home = match p.kind {
            PieceKind::Pawn => sq.y == pawn_rank(view, p.color),
            PieceKind::King => sq == king_home(view, p.color),
            PieceKind::Rook => {
                let king = king_home(view, p.color);
                CastleSide::BOTH
                    .iter()
                    .any(|&side| sq == castling_rook_square(view, king, side))
            }
            _ => sq.y == king_home(view, p.color).y,
        };
        !home
    });
    for sq in moved {
        board.set_status(sq, MoveStatus::Moved)?;
    }
    Ok(())
}

fn apply_castling_field(board: &mut Board, field: &str) -> Result<()> {
    let mut present: Vec<char> = Vec::new();
    if field != "-" {
        for ch in field.chars() {
            if !"KQkq".contains(ch) || present.contains(&ch) {
                return Err(ChessError::MalformedFen(format!(
                    "bad castling field {field:?}"
                )));
            }
            present.push(ch);
        }
    }

    for color in [Color::White, Color::Black] {
        let king = king_home(board, color);
        for side in CastleSide::BOTH {
            let rook = castling_rook_square(board, king, side);
            if present.contains(&castling_letter(color, side)) {
                if !castling_rights(board, color).get(side) {
                    return Err(ChessError::MalformedFen(format!(
                        "castling right {} needs an unmoved king on {king} and rook on {rook}",
                        castling_letter(color, side)
                    )));
                }
            } else if board.get(rook).is_some_and(|p| p.is(color, PieceKind::Rook)) {
                board.set_status(rook, MoveStatus::Moved)?;
            }
        }
    }
    Ok(())
}

fn apply_en_passant_field(board: &mut Board, field: &str, side: Color) -> Result<()> {
    if field == "-" {
        return Ok(());
    }
    let target = board
        .coordinate(field)
        .map_err(|e| ChessError::MalformedFen(format!("bad en passant square: {e}")))?;
    let rusher = side.other();
    let pawn_sq = target.offset(0, rusher.forward());
    let expected_rank = pawn_rank(board, rusher) + rusher.forward();
    let valid = target.y == expected_rank
        && board.is_empty(target)
        && board
            .get(pawn_sq)
            .is_some_and(|p| p.is(rusher, PieceKind::Pawn));
    if !valid {
        return Err(ChessError::MalformedFen(format!(
            "en passant square {field} has no {rusher} pawn that just advanced two squares"
        )));
    }
    board.set_status(pawn_sq, MoveStatus::Rushed)
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
