/// Number of rows on the board. Row 0 is the top row.
pub const ROWS: usize = 6;
/// Number of columns on the board. Column 0 is the leftmost column.
pub const COLS: usize = 7;
/// Length of a winning run.
pub const WIN_LENGTH: usize = 4;
/// Total number of cells, and so the maximum number of moves in one game.
pub const NUM_CELLS: usize = ROWS * COLS;

/// Symbol rendered for an empty cell.
pub const EMPTY_SYMBOL: char = '.';

/// Environment variable read by `init_logging` to pick the log level.
pub const LOG_ENV_VAR: &str = "CONNECT_FOUR_LOG";
