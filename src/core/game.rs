use crate::{
    core::board::{Board, Run},
    core::common::{ColumnError, Move, MoveError},
    core::config::COLS,
    player::Player,
};

/// Outcome of the game as seen after the latest move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Win(Player),
    Draw,
}

impl GameResult {
    pub fn is_over(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

/// Turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the given player to choose a column.
    AwaitingMove(Player),
    /// Terminal: the game ended with a win or a draw.
    GameOver(GameResult),
}

/// Core game logic: the board plus whose turn it is.
///
/// No I/O happens here; `TurnController` drives a `Game` from an input
/// source and a display.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: TurnState,
    moves: usize,
}

impl Game {
    /// Fresh game: empty board, Player 1 to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: TurnState::AwaitingMove(Player::Player1),
            moves: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Number of moves applied so far.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// The player to move, or `None` once the game is over.
    pub fn active_player(&self) -> Option<Player> {
        match self.state {
            TurnState::AwaitingMove(player) => Some(player),
            TurnState::GameOver(_) => None,
        }
    }

    pub fn result(&self) -> GameResult {
        match self.state {
            TurnState::AwaitingMove(_) => GameResult::InProgress,
            TurnState::GameOver(result) => result,
        }
    }

    /// The winning line, if the game was won.
    pub fn winning_run(&self) -> Option<Run> {
        match self.result() {
            GameResult::Win(player) => self.board.find_run(player.piece()),
            _ => None,
        }
    }

    /// Turn one line of player input into a playable 0-based column.
    ///
    /// The input is a 1-based column number; surrounding whitespace is ignored.
    pub fn validate_column(&self, input: &str) -> Result<usize, ColumnError> {
        let number: i64 = input
            .trim()
            .parse()
            .map_err(|_| ColumnError::NotANumber)?;
        if number < 1 || number > COLS as i64 {
            return Err(ColumnError::OutOfRange(number));
        }
        let column = (number - 1) as usize;
        if self.board.is_column_full(column) {
            return Err(ColumnError::ColumnFull(column));
        }
        Ok(column)
    }

    /// Drop the active player's piece into `column` and evaluate the result.
    ///
    /// A win is checked before a full board, so a final move that completes
    /// four in a row is a win rather than a draw. On `Err` the game is left
    /// unchanged.
    pub fn apply_move(&mut self, column: usize) -> Result<GameResult, MoveError> {
        let player = self.active_player().ok_or(MoveError::GameOver)?;
        if column >= COLS {
            return Err(MoveError::InvalidColumn(column));
        }
        let mv = Move {
            column,
            piece: player.piece(),
        };
        let row = self
            .board
            .drop_piece(mv.column, mv.piece)
            .ok_or(MoveError::ColumnFull(column))?;
        self.moves += 1;
        log::debug!(
            "move {}: {} dropped {} into column {} (row {})",
            self.moves,
            player,
            mv.piece.symbol(),
            column + 1,
            row
        );

        let result = if self.board.check_win(mv.piece) {
            GameResult::Win(player)
        } else if self.board.is_full() {
            GameResult::Draw
        } else {
            GameResult::InProgress
        };

        self.state = match result {
            GameResult::InProgress => TurnState::AwaitingMove(player.other()),
            over => TurnState::GameOver(over),
        };
        Ok(result)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
