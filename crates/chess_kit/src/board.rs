use crate::coordinate::{Coordinate, MAX_FILES, MAX_RANK};
use crate::error::{ChessError, Result};
use crate::types::*;

/// Transient render-only marker on a cell. Rules never read it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    Selected,
    Target,
    LastMove,
    Check,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub piece: Option<Piece>,
    pub highlight: Option<Highlight>,
}

/// Rectangular grid of cells addressed `[rank][file]`.
///
/// `Clone` is a full structural copy, which is what the king-safety
/// simulation relies on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    columns: i32,
    rows: i32,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Empty board. Dimensions are clamped to what algebraic notation can name.
    pub fn new(columns: i32, rows: i32) -> Self {
        let columns = columns.clamp(1, MAX_FILES);
        let rows = rows.clamp(1, MAX_RANK);
        Board {
            columns,
            rows,
            cells: vec![vec![Cell::default(); columns as usize]; rows as usize],
        }
    }

    /// Empty 8x8 board.
    pub fn standard() -> Self {
        Board::new(8, 8)
    }

    /// 8x8 board in the standard initial layout, every piece unmoved.
    pub fn standard_setup() -> Self {
        let mut b = Board::standard();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            let f = f as i32;
            b.put(Coordinate::new(f, 0), Piece::new(Color::White, kind));
            b.put(Coordinate::new(f, 1), Piece::new(Color::White, PieceKind::Pawn));
            b.put(Coordinate::new(f, 6), Piece::new(Color::Black, PieceKind::Pawn));
            b.put(Coordinate::new(f, 7), Piece::new(Color::Black, kind));
        }
        b
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }
    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        (0..self.columns).contains(&c.x) && (0..self.rows).contains(&c.y)
    }

    /// Parses algebraic notation and checks it against this board's size.
    pub fn coordinate(&self, text: &str) -> Result<Coordinate> {
        let c = Coordinate::from_algebraic(text)?;
        self.check_bounds(c)?;
        Ok(c)
    }

    fn check_bounds(&self, c: Coordinate) -> Result<()> {
        if self.contains(c) {
            Ok(())
        } else {
            Err(ChessError::InvalidCoordinate(format!(
                "{c} is outside the {}x{} board",
                self.columns, self.rows
            )))
        }
    }

    pub fn cell(&self, c: Coordinate) -> Option<&Cell> {
        if !self.contains(c) {
            return None;
        }
        Some(&self.cells[c.y as usize][c.x as usize])
    }

    fn cell_mut(&mut self, c: Coordinate) -> Result<&mut Cell> {
        self.check_bounds(c)?;
        Ok(&mut self.cells[c.y as usize][c.x as usize])
    }

    /// Occupant of `c`; `None` for empty or off-board squares.
    pub fn get(&self, c: Coordinate) -> Option<Piece> {
        self.cell(c).and_then(|cell| cell.piece)
    }

    /// Occupant of `c`, failing when `c` is off the board.
    pub fn lookup(&self, c: Coordinate) -> Result<Option<Piece>> {
        self.check_bounds(c)?;
        Ok(self.get(c))
    }

    pub fn is_empty(&self, c: Coordinate) -> bool {
        self.contains(c) && self.get(c).is_none()
    }

    /// Places `piece` on an empty square.
    pub fn place(&mut self, c: Coordinate, piece: Piece) -> Result<()> {
        let cell = self.cell_mut(c)?;
        if cell.piece.is_some() {
            return Err(ChessError::Occupied(c));
        }
        cell.piece = Some(piece);
        Ok(())
    }

    /// Unconditional overwrite for setup code. Off-board squares are ignored.
    pub fn put(&mut self, c: Coordinate, piece: Piece) {
        if let Ok(cell) = self.cell_mut(c) {
            cell.piece = Some(piece);
        }
    }

    /// Empties `c`, returning the previous occupant.
    pub fn clear(&mut self, c: Coordinate) -> Result<Option<Piece>> {
        Ok(self.cell_mut(c)?.piece.take())
    }

    /// Moves whatever stands on `from` to `to` without any legality checks.
    /// Returns the piece previously on `to`.
    pub fn relocate(&mut self, from: Coordinate, to: Coordinate) -> Result<Option<Piece>> {
        self.check_bounds(to)?;
        let moving = self.clear(from)?;
        let cell = self.cell_mut(to)?;
        let previous = cell.piece.take();
        cell.piece = moving;
        Ok(previous)
    }

    pub fn set_status(&mut self, c: Coordinate, status: MoveStatus) -> Result<()> {
        if let Some(piece) = self.cell_mut(c)?.piece.as_mut() {
            piece.status = status;
        }
        Ok(())
    }

    /// Occupied squares in scan order: rank 0 upward, files left to right.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().filter_map(move |(x, cell)| {
                cell.piece.map(|p| (Coordinate::new(x as i32, y as i32), p))
            })
        })
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// First occupied square in scan order matching `pred`.
    pub fn find<F>(&self, mut pred: F) -> Option<Coordinate>
    where
        F: FnMut(Coordinate, &Piece) -> bool,
    {
        self.pieces().find(|(c, p)| pred(*c, p)).map(|(c, _)| c)
    }

    /// Every occupied square in scan order matching `pred`.
    pub fn find_all<F>(&self, mut pred: F) -> Vec<Coordinate>
    where
        F: FnMut(Coordinate, &Piece) -> bool,
    {
        self.pieces()
            .filter(|(c, p)| pred(*c, p))
            .map(|(c, _)| c)
            .collect()
    }

    pub fn highlight(&mut self, c: Coordinate, h: Highlight) -> Result<()> {
        self.cell_mut(c)?.highlight = Some(h);
        Ok(())
    }

    pub fn clear_highlights(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.highlight = None;
        }
    }

    /// Row notation from the highest rank down: piece letters with
    /// run-length empty counts, rows joined by `/`.
    pub fn to_rows(&self) -> String {
        let mut rows = Vec::with_capacity(self.rows as usize);
        for y in (0..self.rows).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for x in 0..self.columns {
                match self.get(Coordinate::new(x, y)) {
                    Some(p) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(p.letter());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }

    /// Inverse of [`Board::to_rows`]. Every decoded piece is `Unmoved`.
    pub fn from_rows(text: &str, columns: i32, rows: i32) -> Result<Board> {
        let mut board = Board::new(columns, rows);
        if board.columns != columns || board.rows != rows {
            return Err(ChessError::MalformedFen(format!(
                "unsupported board size {columns}x{rows}"
            )));
        }
        let lines: Vec<&str> = text.split('/').collect();
        if lines.len() != rows as usize {
            return Err(ChessError::MalformedFen(format!(
                "expected {rows} rows, found {}",
                lines.len()
            )));
        }

        for (idx, line) in lines.iter().enumerate() {
            let y = rows - 1 - idx as i32;
            let mut x: i32 = 0;
            let mut run = String::new();
            for ch in line.chars() {
                if ch.is_ascii_digit() {
                    run.push(ch);
                    continue;
                }
                x = x.saturating_add(flush_run(&mut run)?);
                let piece = Piece::from_letter(ch).ok_or_else(|| {
                    ChessError::MalformedFen(format!("unknown piece letter {ch:?}"))
                })?;
                if x >= columns {
                    return Err(ChessError::MalformedFen(format!(
                        "row {line:?} is wider than {columns} columns"
                    )));
                }
                board.put(Coordinate::new(x, y), piece);
                x += 1;
            }
            x = x.saturating_add(flush_run(&mut run)?);
            if x != columns {
                return Err(ChessError::MalformedFen(format!(
                    "row {line:?} decodes to {x} columns, expected {columns}"
                )));
            }
        }
        Ok(board)
    }
}

fn flush_run(run: &mut String) -> Result<i32> {
    if run.is_empty() {
        return Ok(0);
    }
    let n: i32 = run
        .parse()
        .map_err(|_| ChessError::MalformedFen(format!("bad empty-square count {run:?}")))?;
    run.clear();
    if n == 0 {
        return Err(ChessError::MalformedFen("zero empty-square count".into()));
    }
    Ok(n)
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
