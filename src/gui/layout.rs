//! Pointer coordinates to grid cells.

use crate::config::{BOARD_SIZE, CELL_HEIGHT, CELL_WIDTH, EDGE_TOLERANCE};
use crate::Position;

/// Number of panel cells to the right of the grid.
pub const PANEL_CELLS: u16 = 2;

/// Geometry of the on-screen grid. The grid starts at (0, 0); the side panel
/// occupies the cell columns after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerLayout {
    pub cell_width: u16,
    pub cell_height: u16,
    pub tolerance: u16,
}

impl Default for PointerLayout {
    fn default() -> Self {
        Self {
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            tolerance: EDGE_TOLERANCE,
        }
    }
}

impl PointerLayout {
    /// Width of the whole screen, grid plus panel, including the closing border.
    pub fn screen_width(&self) -> u16 {
        let cells = BOARD_SIZE as u32 + u32::from(PANEL_CELLS);
        clamp(u32::from(self.cell_width) * cells + 1)
    }

    pub fn screen_height(&self) -> u16 {
        clamp(u32::from(self.cell_height) * BOARD_SIZE as u32 + 1)
    }

    /// Grid cell under the pointer, or `None` outside the grid or on a
    /// cell boundary.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<Position> {
        let n = BOARD_SIZE as u32;
        if u32::from(x) >= u32::from(self.cell_width) * n
            || u32::from(y) >= u32::from(self.cell_height) * n
        {
            return None;
        }
        if near_edge(x, self.cell_width, self.tolerance)
            || near_edge(y, self.cell_height, self.tolerance)
        {
            return None;
        }
        Some(Position::new(
            i32::from(y / self.cell_height),
            i32::from(x / self.cell_width),
        ))
    }

    /// The restart button sits in the lower right panel cell.
    pub fn in_restart_region(&self, x: u16, y: u16) -> bool {
        x / self.cell_width >= BOARD_SIZE as u16 && y / self.cell_height >= BOARD_SIZE as u16 - 1
    }

    /// Top-left screen coordinate of the cell at (`cell_col`, `cell_row`).
    /// Panel cells continue the grid's numbering.
    pub fn origin(&self, cell_col: u16, cell_row: u16) -> (u16, u16) {
        (
            clamp(u32::from(cell_col) * u32::from(self.cell_width)),
            clamp(u32::from(cell_row) * u32::from(self.cell_height)),
        )
    }
}

fn clamp(v: u32) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

// Distance from `v` to the nearest multiple of `cell` is within `tolerance`.
fn near_edge(v: u16, cell: u16, tolerance: u16) -> bool {
    let mut diff = v % cell;
    if diff > cell / 2 {
        diff = cell - diff;
    }
    diff <= tolerance
}
