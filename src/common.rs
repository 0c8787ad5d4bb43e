//! Common types for tic-tac-toe: engine errors.

use crate::player::Position;

/// Errors returned by board and game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Position lies outside the 3x3 grid.
    OutOfBounds(Position),
    /// Target cell already belongs to a player.
    CellOccupied(Position),
    /// Value is neither of the two player markers.
    InvalidPlayer(u8),
    /// Alternation requested from the empty sentinel.
    InvalidAlternationInput,
    /// Game already reached a terminal state.
    GameOver,
    /// Snapshot turn disagrees with the board it carries.
    InconsistentState,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds(pos) => write!(f, "Position {} is out of bounds", pos),
            BoardError::CellOccupied(pos) => write!(f, "Position {} is already occupied", pos),
            BoardError::InvalidPlayer(v) => write!(f, "Invalid player value, {}", v),
            BoardError::InvalidAlternationInput => write!(f, "Expected X or O, given none"),
            BoardError::GameOver => write!(f, "Game is already over"),
            BoardError::InconsistentState => write!(f, "Game state is inconsistent with its board"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
