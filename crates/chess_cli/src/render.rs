//! Text diagrams of a board, highest rank first.

use chess_kit::{Board, Color, Coordinate, Highlight, Piece, PieceKind};

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub unicode: bool,
    pub coordinates: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            unicode: false,
            coordinates: true,
        }
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            unicode: config.unicode,
            coordinates: config.show_coordinates,
        }
    }
}

fn glyph(piece: Piece) -> char {
    use PieceKind::*;
    match (piece.color, piece.kind) {
        (Color::White, King) => '♔',
        (Color::White, Queen) => '♕',
        (Color::White, Rook) => '♖',
        (Color::White, Bishop) => '♗',
        (Color::White, Knight) => '♘',
        (Color::White, Pawn) => '♙',
        (Color::Black, King) => '♚',
        (Color::Black, Queen) => '♛',
        (Color::Black, Rook) => '♜',
        (Color::Black, Bishop) => '♝',
        (Color::Black, Knight) => '♞',
        (Color::Black, Pawn) => '♟',
    }
}

fn markers(highlight: Option<Highlight>) -> (char, char) {
    match highlight {
        None => (' ', ' '),
        Some(Highlight::Selected) => ('[', ']'),
        Some(Highlight::Target) => ('(', ')'),
        Some(Highlight::LastMove) => ('<', '>'),
        Some(Highlight::Check) => ('!', '!'),
    }
}

/// Three columns per cell: the piece (or an empty-square dot) between two
/// highlight markers.
pub fn render(board: &Board, options: RenderOptions) -> String {
    let label_width = board.rows().to_string().len();
    let empty = if options.unicode { '·' } else { '.' };
    let mut lines = Vec::new();

    for y in (0..board.rows()).rev() {
        let mut line = String::new();
        if options.coordinates {
            line.push_str(&format!("{:>label_width$} ", y + 1));
        }
        for x in 0..board.columns() {
            let cell = board.cell(Coordinate::new(x, y)).copied().unwrap_or_default();
            let (open, close) = markers(cell.highlight);
            let ch = match cell.piece {
                Some(p) if options.unicode => glyph(p),
                Some(p) => p.letter(),
                None => empty,
            };
            line.push(open);
            line.push(ch);
            line.push(close);
        }
        lines.push(line.trim_end().to_string());
    }

    if options.coordinates {
        let mut footer = " ".repeat(label_width + 1);
        for x in 0..board.columns() {
            let file = (b'a' + x as u8) as char;
            footer.push_str(&format!(" {file} "));
        }
        lines.push(footer.trim_end().to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
