//! Board coordinates and algebraic notation.
//!
//! Files are letters (`A` = 0) and ranks are 1-based numbers, so `A1` is the
//! origin `(0, 0)`. Notation stops at file `Z` and rank `99`.

use std::fmt;
use std::str::FromStr;

use crate::error::{ChessError, Result};

/// Highest rank expressible in two digits.
pub const MAX_RANK: i32 = 99;
/// Number of file letters `A..=Z`.
pub const MAX_FILES: i32 = 26;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate `dx` files and `dy` ranks away.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Parses `"E4"`-style notation. Only the syntax is checked here; use
    /// [`crate::Board::coordinate`] to also check the board's dimensions.
    pub fn from_algebraic(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        if !(2..=3).contains(&bytes.len()) {
            return Err(ChessError::InvalidCoordinate(format!(
                "{text:?} must be a file letter followed by a 1-2 digit rank"
            )));
        }
        let file = bytes[0];
        if !file.is_ascii_alphabetic() {
            return Err(ChessError::InvalidCoordinate(format!(
                "{text:?} does not start with a file letter"
            )));
        }
        let digits = &text[1..];
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ChessError::InvalidCoordinate(format!(
                "{text:?} has a non-numeric rank"
            )));
        }
        if digits.starts_with('0') {
            return Err(ChessError::InvalidCoordinate(format!(
                "{text:?} has a rank with a leading zero"
            )));
        }
        let rank: i32 = digits
            .parse()
            .map_err(|_| ChessError::InvalidCoordinate(format!("{text:?} has no rank")))?;
        if rank < 1 {
            return Err(ChessError::InvalidCoordinate(format!(
                "{text:?} has a non-positive rank"
            )));
        }
        let x = (file.to_ascii_uppercase() - b'A') as i32;
        Ok(Self::new(x, rank - 1))
    }

    /// Uppercase algebraic notation, e.g. `"E4"`. `None` when the coordinate
    /// has no notation (negative or past `Z99`).
    pub fn to_algebraic(self) -> Option<String> {
        if !(0..MAX_FILES).contains(&self.x) || !(0..MAX_RANK).contains(&self.y) {
            return None;
        }
        let file = (b'A' + self.x as u8) as char;
        Some(format!("{}{}", file, self.y + 1))
    }

    /// Square color parity; two coordinates share a color iff equal.
    pub fn parity(self) -> i32 {
        (self.x + self.y).rem_euclid(2)
    }

    /// Squares strictly between `self` and `other` when both share a rank,
    /// file or diagonal. Empty otherwise, and for adjacent squares.
    pub fn squares_between(self, other: Coordinate) -> Vec<Coordinate> {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let aligned = dx == 0 || dy == 0 || dx.abs() == dy.abs();
        if !aligned || (dx == 0 && dy == 0) {
            return Vec::new();
        }
        let (sx, sy) = (dx.signum(), dy.signum());
        let steps = dx.abs().max(dy.abs());
        (1..steps).map(|i| self.offset(sx * i, sy * i)).collect()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(s) => f.write_str(&s),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

impl FromStr for Coordinate {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self> {
        Coordinate::from_algebraic(s)
    }
}

#[cfg(test)]
#[path = "coordinate_tests.rs"]
mod coordinate_tests;
