//! Commonly used types and utilities for ease of import.

pub use crate::{alternate_player, Board, BoardError, Cell, GameEngine, GameStatus, Player, Position};

#[cfg(feature = "std")]
pub use crate::{
    gui::{Assets, PointerApp, PointerLayout},
    present_board, ConsoleDriver,
};
