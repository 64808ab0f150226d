//! Long-algebraic move text as spoken by UCI engines (`e2e4`, `e7e8q`).

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::error::{ChessError, Result};
use crate::game::Game;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UciMove {
    pub from: Coordinate,
    pub to: Coordinate,
    pub promotion: Option<PieceKind>,
}

pub fn move_to_uci(from: Coordinate, to: Coordinate, promotion: Option<PieceKind>) -> String {
    let mut s = String::new();
    s.push_str(&from.to_string().to_ascii_lowercase());
    s.push_str(&to.to_string().to_ascii_lowercase());
    if let Some(p) = promotion {
        s.push(p.letter());
    }
    s
}

/// Splits leading `letter digits` off `text`.
fn take_square(text: &str) -> Option<(&str, &str)> {
    let mut chars = text.char_indices();
    let (_, first) = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    let end = chars
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    if end == 1 {
        return None;
    }
    Some(text.split_at(end))
}

/// Parses `e2e4` / `e7e8q` and checks both squares against `board`.
pub fn parse_uci_move(board: &Board, text: &str) -> Result<UciMove> {
    let bad = || ChessError::MalformedUci(text.to_string());
    let (from, rest) = take_square(text).ok_or_else(bad)?;
    let (to, rest) = take_square(rest).ok_or_else(bad)?;
    let promotion = match rest {
        "" => None,
        p if p.len() == 1 => {
            let kind = p
                .chars()
                .next()
                .and_then(PieceKind::from_letter)
                .filter(|k| k.is_promotion_target())
                .ok_or_else(bad)?;
            Some(kind)
        }
        _ => return Err(bad()),
    };
    Ok(UciMove {
        from: board.coordinate(from)?,
        to: board.coordinate(to)?,
        promotion,
    })
}

/// Reads the move out of a `bestmove` line. `Ok(None)` when the engine
/// reports that it has no move.
pub fn parse_bestmove(board: &Board, line: &str) -> Result<Option<UciMove>> {
    let mut parts = line.split_whitespace();
    if parts.next() != Some("bestmove") {
        return Err(ChessError::MalformedUci(line.to_string()));
    }
    match parts.next() {
        None | Some("(none)") | Some("0000") => Ok(None),
        Some(mv) => parse_uci_move(board, mv).map(Some),
    }
}

/// `position fen ...` command for the game's current position.
pub fn position_command(game: &Game) -> String {
    format!("position fen {}", game.to_fen())
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
