//! Game board state: a fixed `ROWS × COLS` grid of cells under gravity.

use alloc::string::{String, ToString};
use core::fmt;

use crate::core::common::{Cell, Piece};
use crate::core::config::{COLS, ROWS, WIN_LENGTH};

/// Directions tried from each origin cell, in scan order.
const DIRECTIONS: [Direction; 4] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::DiagonalDownRight,
    Direction::DiagonalDownLeft,
];

/// Line direction of a run, stepping away from its origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// A winning line: `WIN_LENGTH` cells holding the same piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub piece: Piece,
    pub direction: Direction,
    /// `(row, col)` of each cell, starting at the origin.
    pub cells: [(usize, usize); WIN_LENGTH],
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Reset every cell to empty for a new game.
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Cell at `(row, col)`; row 0 is the top.
    ///
    /// # Panics
    /// If `row >= ROWS` or `col >= COLS`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Returns `true` when the top cell of `col` is occupied.
    ///
    /// # Panics
    /// If `col >= COLS`. Callers validate the column first.
    pub fn is_column_full(&self, col: usize) -> bool {
        !self.cells[0][col].is_empty()
    }

    /// Drop `piece` into `col`, returning the row it landed on.
    ///
    /// A full column is left untouched and yields `None`.
    ///
    /// # Panics
    /// If `col >= COLS`.
    pub fn drop_piece(&mut self, col: usize, piece: Piece) -> Option<usize> {
        let row = (0..ROWS).rev().find(|&r| self.cells[r][col].is_empty())?;
        self.cells[row][col] = Cell::Occupied(piece);
        Some(row)
    }

    /// Every column is full. Gravity means checking the top row is enough.
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns that can still take a piece, left to right.
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| !self.is_column_full(col))
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Returns `true` if `piece` has four in a row anywhere on the board.
    pub fn check_win(&self, piece: Piece) -> bool {
        self.find_run(piece).is_some()
    }

    /// First run of `piece`, scanning origins in row-major order.
    pub fn find_run(&self, piece: Piece) -> Option<Run> {
        for row in 0..ROWS {
            for col in 0..COLS {
                if !self.cells[row][col].holds(piece) {
                    continue;
                }
                for direction in DIRECTIONS {
                    if let Some(cells) = self.run_from(row, col, piece, direction) {
                        return Some(Run {
                            piece,
                            direction,
                            cells,
                        });
                    }
                }
            }
        }
        None
    }

    /// Walk `WIN_LENGTH` steps from `(row, col)`, stopping at the edge or
    /// at any cell not holding `piece`.
    fn run_from(
        &self,
        row: usize,
        col: usize,
        piece: Piece,
        direction: Direction,
    ) -> Option<[(usize, usize); WIN_LENGTH]> {
        let (dr, dc) = direction.delta();
        let mut cells = [(0, 0); WIN_LENGTH];
        for (i, slot) in cells.iter_mut().enumerate() {
            let r = row.checked_add_signed(dr * i as isize)?;
            let c = col.checked_add_signed(dc * i as isize)?;
            if r >= ROWS || c >= COLS || !self.cells[r][c].holds(piece) {
                return None;
            }
            *slot = (r, c);
        }
        Some(cells)
    }

    /// Text snapshot of the grid with the 1-based column numbers players type.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        for c in 0..COLS {
            if c > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c + 1)?;
        }
        writeln!(f)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ pieces: {} }}", self.piece_count())?;
        write!(f, "{}", self)
    }
}
