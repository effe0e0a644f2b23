//! Board module - manages the tile grid
//!
//! The board is a `rows x cols` grid where each cell is empty or holds a tile
//! kind. Storage is a flat row-major vector; a cell's identity is its linear
//! index `row * cols + col`. Row 0 is the top; gravity pulls towards the last
//! row.

use std::fmt;

use arrayvec::ArrayVec;

use crate::rng::TileSource;
use crate::types::{Cell, TileKind};

/// Errors from [`Board::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("board has no rows")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected}")]
    Ragged {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("unexpected character {ch:?} in row {row}")]
    BadCell { row: usize, ch: char },

    #[error("board is larger than 255x255")]
    TooLarge,
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: u8,
    cols: u8,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with every cell empty
    pub fn empty(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        }
    }

    /// Fill every cell with an independent random kind from `0..kinds`.
    ///
    /// The result may contain runs; callers settle it before play.
    pub fn random(rows: u8, cols: u8, kinds: u8, source: &mut impl TileSource) -> Self {
        let mut board = Self::empty(rows, cols);
        for cell in &mut board.cells {
            *cell = Some(source.next_kind(kinds));
        }
        board
    }

    /// Parse a board from text rows: letters are kinds (`A` = 0), `.` is empty.
    /// Whitespace inside a row is ignored.
    ///
    /// ```
    /// use sweet_match_core::Board;
    ///
    /// let board = Board::from_rows(&["AAB", "CDA", "ABA"]).unwrap();
    /// assert_eq!((board.rows(), board.cols()), (3, 3));
    /// assert_eq!(board.to_string(), "AAB\nCDA\nABA");
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardParseError> {
        if rows.is_empty() {
            return Err(BoardParseError::Empty);
        }

        let mut cells = Vec::new();
        let mut width = None;
        for (row, line) in rows.iter().enumerate() {
            let start = cells.len();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let cell = match ch {
                    '.' => None,
                    _ => match TileKind::from_letter(ch) {
                        Some(kind) => Some(kind),
                        None => return Err(BoardParseError::BadCell { row, ch }),
                    },
                };
                cells.push(cell);
            }
            let got = cells.len() - start;
            match width {
                None => width = Some(got),
                Some(expected) if expected != got => {
                    return Err(BoardParseError::Ragged { row, got, expected })
                }
                Some(_) => {}
            }
        }

        let cols = width.unwrap_or(0);
        if cols == 0 {
            return Err(BoardParseError::Empty);
        }
        if rows.len() > u8::MAX as usize || cols > u8::MAX as usize {
            return Err(BoardParseError::TooLarge);
        }

        Ok(Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// (row, col) of a flat index, or None if out of bounds
    #[inline(always)]
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.cells.len() {
            return None;
        }
        let cols = self.cols as usize;
        Some((index / cols, index % cols))
    }

    /// Cell at `index`; None if out of bounds
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Set cell at `index`. Returns false if out of bounds
    pub fn set(&mut self, index: usize, cell: Cell) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether `a` and `b` share a side (same row ±1 column, or same column ±1 row)
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// 4-directional neighbours of `index` (up, down, left, right order)
    pub fn neighbors(&self, index: usize) -> ArrayVec<usize, 4> {
        let mut out = ArrayVec::new();
        let Some((row, col)) = self.position(index) else {
            return out;
        };
        if row > 0 {
            out.push(index - self.cols as usize);
        }
        if row + 1 < self.rows as usize {
            out.push(index + self.cols as usize);
        }
        if col > 0 {
            out.push(index - 1);
        }
        if col + 1 < self.cols as usize {
            out.push(index + 1);
        }
        out
    }

    /// Exchange two cells. Returns false (and does nothing) if either is out of bounds
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.cells.len() || b >= self.cells.len() {
            return false;
        }
        self.cells.swap(a, b);
        true
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Let tiles fall: in every column, non-empty cells move down keeping their
    /// relative order, leaving the gaps at the top. Returns the number of tiles moved.
    pub fn apply_gravity(&mut self) -> usize {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut moved = 0;

        for col in 0..cols {
            // Two-pointer compaction from the bottom up.
            let mut write = rows;
            for read in (0..rows).rev() {
                let src = read * cols + col;
                if let Some(kind) = self.cells[src] {
                    write -= 1;
                    if write != read {
                        self.cells[write * cols + col] = Some(kind);
                        self.cells[src] = None;
                        moved += 1;
                    }
                }
            }
        }

        moved
    }

    /// Fill every empty cell with a fresh kind. Draw order is column by
    /// column (left to right), top to bottom within a column. Returns the number filled.
    pub fn refill(&mut self, kinds: u8, source: &mut impl TileSource) -> usize {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut filled = 0;

        for col in 0..cols {
            for row in 0..rows {
                let cell = &mut self.cells[row * cols + col];
                if cell.is_none() {
                    *cell = Some(source.next_kind(kinds));
                    filled += 1;
                }
            }
        }

        filled
    }

    /// Gravity followed by refill. A board without gaps is left untouched and
    /// draws nothing from `source`. Returns the number of cells refilled.
    pub fn apply_gravity_and_refill(&mut self, kinds: u8, source: &mut impl TileSource) -> usize {
        if self.is_full() {
            return 0;
        }
        self.apply_gravity();
        self.refill(kinds, source)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.cols as usize;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % cols == 0 {
                writeln!(f)?;
            }
            let ch = match cell {
                Some(kind) => kind.letter(),
                None => '.',
            };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
