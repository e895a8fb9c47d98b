#![cfg(feature = "std")]

use crate::{
    core::{config::COLS, Game, GameResult, TurnState},
    player::{GameDisplay, InputSource, Player},
};

/// Orchestrator combining a `Game` with an input source and a display.
///
/// Runs the per-turn protocol: show the board, obtain a legal column from the
/// active player (re-prompting on bad input), apply it, and stop on a win or
/// a draw.
pub struct TurnController<I, D> {
    game: Game,
    input: I,
    display: D,
}

impl<I: InputSource, D: GameDisplay> TurnController<I, D> {
    pub fn new(input: I, display: D) -> Self {
        Self::with_game(Game::new(), input, display)
    }

    /// Resume from an existing game, e.g. a board set up by a test.
    pub fn with_game(game: Game, input: I, display: D) -> Self {
        Self {
            game,
            input,
            display,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Give back the collaborators once the session is done.
    pub fn into_parts(self) -> (Game, I, D) {
        (self.game, self.input, self.display)
    }

    /// Play until the game ends and return the final result.
    pub fn run(&mut self) -> anyhow::Result<GameResult> {
        log::info!("new game started");
        loop {
            let player = match self.game.state() {
                TurnState::AwaitingMove(player) => player,
                TurnState::GameOver(result) => {
                    self.announce(result)?;
                    return Ok(result);
                }
            };
            // `apply_move` ends the game on the move that fills the board,
            // so there is always a legal column here.
            debug_assert!(!self.game.board().is_full());
            self.display.show_board(&self.game.board().render())?;
            let column = self.request_column(player)?;
            let applied = self.game.apply_move(column);
            debug_assert!(
                applied.is_ok(),
                "validated column {} was rejected: {:?}",
                column,
                applied
            );
            applied?;
        }
    }

    fn announce(&mut self, result: GameResult) -> anyhow::Result<()> {
        let message = match result {
            GameResult::Win(player) => {
                if let Some(run) = self.game.winning_run() {
                    log::info!(
                        "{} wins with a {:?} run at {:?}",
                        player,
                        run.direction,
                        run.cells
                    );
                }
                format!("{} wins!", player)
            }
            GameResult::Draw => {
                log::info!("game drawn after {} moves", self.game.move_count());
                "Draw!".to_string()
            }
            GameResult::InProgress => return Ok(()),
        };
        self.display.show_board(&self.game.board().render())?;
        self.display.show_message(&message)
    }

    /// Keep asking `player` for a column until one is playable.
    fn request_column(&mut self, player: Player) -> anyhow::Result<usize> {
        loop {
            self.display.show_message(&format!(
                "{} ({}), enter the column (1-{}) to drop your piece:",
                player,
                player.piece().symbol(),
                COLS
            ))?;
            let line = self.input.read_line()?;
            match self.game.validate_column(&line) {
                Ok(column) => return Ok(column),
                Err(e) => {
                    log::debug!("{} entered {:?}: {:?}", player, line, e);
                    self.display.show_message(&e.to_string())?;
                }
            }
        }
    }
}
