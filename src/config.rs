/// Side length of the square grid.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Default width of one grid cell in the pointer front end, in terminal columns.
pub const CELL_WIDTH: u16 = 9;

/// Default height of one grid cell in the pointer front end, in terminal rows.
pub const CELL_HEIGHT: u16 = 5;

/// Largest cell side accepted on the command line; keeps the screen size in `u16`.
pub const MAX_CELL_SIZE: u16 = 1000;

/// Clicks this close to a cell boundary are ignored.
pub const EDGE_TOLERANCE: u16 = 0;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "TICTACTOE_LOG";
