//! Players, cell owners and grid positions.

use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use core::fmt;

/// Byte stored for an empty cell.
pub const EMPTY_BYTE: u8 = 0;

/// One of the two players. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Marker character drawn on the grid.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.symbol())
    }
}

impl From<Player> for u8 {
    fn from(p: Player) -> Self {
        p.symbol() as u8
    }
}

impl TryFrom<u8> for Player {
    type Error = BoardError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            b'X' => Ok(Player::X),
            b'O' => Ok(Player::O),
            other => Err(BoardError::InvalidPlayer(other)),
        }
    }
}

impl TryFrom<Cell> for Player {
    type Error = BoardError;

    fn try_from(cell: Cell) -> Result<Self, Self::Error> {
        match cell {
            Cell::Taken(p) => Ok(p),
            Cell::Empty => Err(BoardError::InvalidPlayer(EMPTY_BYTE)),
        }
    }
}

/// Owner of a single cell. `Empty` doubles as the "nobody" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Taken(p) => Some(p),
            Cell::Empty => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(p: Player) -> Self {
        Cell::Taken(p)
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => EMPTY_BYTE,
            Cell::Taken(p) => p.into(),
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = BoardError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        if v == EMPTY_BYTE {
            return Ok(Cell::Empty);
        }
        Player::try_from(v).map(Cell::Taken)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.write_str("Nobody"),
            Cell::Taken(p) => p.fmt(f),
        }
    }
}

/// Returns the player who moves after `current`.
///
/// There is no alternation before the first move, so the empty sentinel is
/// rejected.
pub fn alternate_player(current: Cell) -> Result<Player, BoardError> {
    match current {
        Cell::Taken(p) => Ok(p.opponent()),
        Cell::Empty => Err(BoardError::InvalidAlternationInput),
    }
}

/// A (row, column) pair. Only positions inside the grid are usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Convert a 1-indexed coordinate pair, as typed by a person, to 0-indexed.
    pub fn from_one_based(row: i32, col: i32) -> Self {
        Self::new(row.saturating_sub(1), col.saturating_sub(1))
    }

    /// Returns `true` when both coordinates lie in `[0, 3)`.
    pub fn is_valid(self) -> bool {
        let n = BOARD_SIZE as i32;
        (0..n).contains(&self.row) && (0..n).contains(&self.col)
    }

    /// Grid indices for a valid position.
    pub(crate) fn index(self) -> Option<(usize, usize)> {
        if self.is_valid() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
