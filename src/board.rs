//! The 3x3 grid of cell owners, move validation and outcome detection.

use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::player::{Cell, Player, Position};
use core::fmt;

type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Main board state: the owner of every cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Create a board with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Owner of the cell at `pos`.
    pub fn get(&self, pos: Position) -> Result<Cell, BoardError> {
        let (r, c) = pos.index().ok_or(BoardError::OutOfBounds(pos))?;
        Ok(self.cells[r][c])
    }

    /// Read-only view of the grid, row by row.
    pub fn rows(&self) -> &Grid {
        &self.cells
    }

    /// Returns `Ok(true)` if `pos` is empty, `Ok(false)` if it is taken.
    pub fn can_move(&self, pos: Position) -> Result<bool, BoardError> {
        Ok(self.get(pos)?.is_empty())
    }

    /// Place `player` at `pos`. This is the only way a cell changes owner.
    pub fn mark(&mut self, pos: Position, player: Player) -> Result<(), BoardError> {
        if !self.can_move(pos)? {
            return Err(BoardError::CellOccupied(pos));
        }
        let (r, c) = pos.index().ok_or(BoardError::OutOfBounds(pos))?;
        self.cells[r][c] = Cell::Taken(player);
        Ok(())
    }

    /// Like [`Board::mark`], but takes an owner value that may be the empty
    /// sentinel.
    pub fn mark_cell(&mut self, pos: Position, owner: Cell) -> Result<(), BoardError> {
        let player = Player::try_from(owner)?;
        self.mark(pos, player)
    }

    /// Empty positions in row-major order.
    pub fn open_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_empty())
                .map(move |(c, _)| Position::new(r as i32, c as i32))
        })
    }

    /// The player holding three in a row, or `Cell::Empty` if nobody does.
    ///
    /// Rows are checked first, then columns, then the main diagonal and the
    /// anti-diagonal.
    pub fn winner(&self) -> Cell {
        self.lines()
            .into_iter()
            .find_map(|line| line_owner(line.into_iter()))
            .unwrap_or(Cell::Empty)
    }

    /// Whether `player` owns at least one complete line.
    pub fn has_line(&self, player: Player) -> bool {
        self.lines()
            .into_iter()
            .any(|line| line_owner(line.into_iter()) == Some(Cell::Taken(player)))
    }

    // All eight lines in evaluation order.
    fn lines(&self) -> [[Cell; BOARD_SIZE]; 2 * BOARD_SIZE + 2] {
        let g = &self.cells;
        let n = BOARD_SIZE;
        core::array::from_fn(|i| match i {
            i if i < n => g[i],
            i if i < 2 * n => core::array::from_fn(|r| g[r][i - n]),
            i if i == 2 * n => core::array::from_fn(|k| g[k][k]),
            _ => core::array::from_fn(|k| g[k][n - 1 - k]),
        })
    }

    /// A full board without a winner.
    pub fn is_draw(&self) -> bool {
        self.open_positions().next().is_none() && self.winner().is_empty()
    }

    /// Set every cell back to empty.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Number of cells owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Cell::Taken(player))
            .count()
    }
}

// Owner shared by every cell of the line, if it is not the empty sentinel.
fn line_owner(mut line: impl Iterator<Item = Cell>) -> Option<Cell> {
    let first = line.next()?;
    if first.is_empty() {
        return None;
    }
    if line.all(|c| c == first) {
        Some(first)
    } else {
        None
    }
}

impl TryFrom<[[u8; BOARD_SIZE]; BOARD_SIZE]> for Board {
    type Error = BoardError;

    fn try_from(raw: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, Self::Error> {
        let mut board = Board::new();
        for (r, row) in raw.iter().enumerate() {
            for (c, v) in row.iter().enumerate() {
                board.cells[r][c] = Cell::try_from(*v)?;
            }
        }
        Ok(board)
    }
}

impl From<&Board> for [[u8; BOARD_SIZE]; BOARD_SIZE] {
    fn from(b: &Board) -> Self {
        b.cells.map(|row| row.map(u8::from))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let ch = cell.player().map_or(' ', Player::symbol);
                write!(f, "{}", ch)?;
                if c + 1 < BOARD_SIZE {
                    f.write_str(" | ")?;
                }
            }
            if r + 1 < BOARD_SIZE {
                f.write_str("\n---------\n")?;
            }
        }
        Ok(())
    }
}
