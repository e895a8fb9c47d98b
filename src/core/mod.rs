//! Core Connect Four engine (no_std compatible)
//!
//! This module contains the pure game logic. It needs only `alloc` (for
//! rendering) and the `log` facade, so it builds without the `std` feature.

pub mod board;
pub mod common;
pub mod config;
pub mod game;

// Re-export commonly used types
pub use board::{Board, Direction, Run};
pub use common::{Cell, ColumnError, Move, MoveError, Piece};
pub use config::*;
pub use game::{Game, GameResult, TurnState};
