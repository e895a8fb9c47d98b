//! Players and the collaborators that talk to them
//!
//! This module defines:
//! - Player: the two seats at the table and the piece each one drops
//! - InputSource / GameDisplay: the seams the turn controller reads moves
//!   from and writes the board to
//! - cli: line-based implementations over stdin/stdout (or any reader/writer)

use core::fmt;

use crate::core::common::Piece;

/// One of the two players. Player 1 moves first and plays `X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// The opponent.
    pub fn other(self) -> Player {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    pub fn piece(self) -> Piece {
        match self {
            Player::Player1 => Piece::X,
            Player::Player2 => Piece::O,
        }
    }

    /// 1 or 2, as shown to the players.
    pub fn number(self) -> u8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Where the turn controller gets raw column choices from.
///
/// Each call yields one line of text, typically a 1-based column number.
/// Validation is the controller's job; implementations just hand over text.
#[cfg(feature = "std")]
pub trait InputSource {
    /// Read the next line. Returns an error once no more input can arrive.
    fn read_line(&mut self) -> anyhow::Result<std::string::String>;
}

/// Where the turn controller shows the board and messages.
#[cfg(feature = "std")]
pub trait GameDisplay {
    /// Show a rendered board snapshot.
    fn show_board(&mut self, rendered: &str) -> anyhow::Result<()>;

    /// Show a prompt, a validation message or the final result.
    fn show_message(&mut self, message: &str) -> anyhow::Result<()>;
}

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{LineInput, WriterDisplay};
