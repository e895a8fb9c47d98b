//! Commonly used types and utilities for ease of import.

pub use crate::{Board, Cell, ColumnError, Game, GameResult, Piece, Player, TurnState};

#[cfg(feature = "std")]
pub use crate::{init_logging, GameDisplay, InputSource, LineInput, TurnController, WriterDisplay};
