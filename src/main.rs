#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use connect_four::{init_logging, GameResult, LineInput, TurnController, WriterDisplay};

/// Two-player Connect Four in the terminal.
///
/// Players take turns typing a column number (1-7). The first to line up four
/// pieces horizontally, vertically or diagonally wins. Set CONNECT_FOUR_LOG
/// (e.g. `debug`) to see engine logs on stderr.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_logging();

    let mut controller = TurnController::new(LineInput::stdin(), WriterDisplay::stdout());
    match controller.run()? {
        GameResult::Win(player) => log::info!("session over, {} won", player),
        GameResult::Draw => log::info!("session over, draw"),
        GameResult::InProgress => {}
    }
    Ok(())
}
