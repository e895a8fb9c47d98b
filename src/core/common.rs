//! Common types for Connect Four: pieces, cells, moves and error enums.

use crate::core::config::{COLS, EMPTY_SYMBOL};

/// A marker belonging to one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    X,
    O,
}

impl Piece {
    /// Symbol used when rendering the board.
    pub const fn symbol(self) -> char {
        match self {
            Piece::X => 'X',
            Piece::O => 'O',
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns `true` if the cell holds `piece`.
    pub fn holds(self, piece: Piece) -> bool {
        self == Cell::Occupied(piece)
    }

    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => EMPTY_SYMBOL,
            Cell::Occupied(piece) => piece.symbol(),
        }
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        Cell::Occupied(piece)
    }
}

/// A single column drop: which column and whose piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub column: usize,
    pub piece: Piece,
}

/// Reasons a line of player input does not name a playable column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnError {
    /// Input could not be parsed as an integer.
    NotANumber,
    /// Parsed number (1-based, as typed) is outside `1..=COLS`.
    OutOfRange(i64),
    /// Column (0-based) is already full.
    ColumnFull(usize),
}

impl core::fmt::Display for ColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ColumnError::NotANumber => write!(
                f,
                "Invalid input. Please enter a number between 1 and {}.",
                COLS
            ),
            ColumnError::OutOfRange(_) => write!(f, "Column must be between 1 and {}.", COLS),
            ColumnError::ColumnFull(_) => write!(f, "The selected column is full."),
        }
    }
}

/// Errors returned by `Game::apply_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Column index is not in `0..COLS`.
    InvalidColumn(usize),
    /// Column has no empty cell left.
    ColumnFull(usize),
    /// The game already reached a result.
    GameOver,
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::InvalidColumn(col) => write!(f, "Column index {} is out of range", col),
            MoveError::ColumnFull(col) => write!(f, "Column index {} is full", col),
            MoveError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColumnError {}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
