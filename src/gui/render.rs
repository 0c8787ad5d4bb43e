//! Draws a game into a framebuffer.

use super::assets::{Assets, Sprite};
use super::fb::FrameBuffer;
use super::layout::PointerLayout;
use crate::config::BOARD_SIZE;
use crate::{Cell, GameEngine, GameStatus};

const PANEL_COL: u16 = BOARD_SIZE as u16;

/// Render the grid, the marks and the side panel.
pub fn render(engine: &GameEngine, layout: &PointerLayout, assets: &Assets) -> FrameBuffer {
    let mut fb = FrameBuffer::new(layout.screen_width(), layout.screen_height());
    draw_grid(&mut fb, layout);

    for (r, row) in engine.board().rows().iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            blit(&mut fb, layout, assets.symbol(*cell), c as u16, r as u16);
        }
    }

    match engine.status() {
        GameStatus::InProgress => {
            if let Some(p) = engine.to_move() {
                blit(&mut fb, layout, assets.symbol(Cell::Taken(p)), PANEL_COL, 0);
                blit(&mut fb, layout, &assets.turn, PANEL_COL + 1, 0);
            }
        }
        GameStatus::Won(p) => {
            blit(&mut fb, layout, assets.symbol(Cell::Taken(p)), PANEL_COL, 0);
            blit(&mut fb, layout, &assets.won, PANEL_COL + 1, 0);
            blit(&mut fb, layout, &assets.congrats, PANEL_COL, 1);
        }
        GameStatus::Draw => blit(&mut fb, layout, &assets.draw, PANEL_COL, 1),
    }

    if engine.is_finished() {
        blit(&mut fb, layout, &assets.restart, PANEL_COL, 2);
    }
    fb
}

fn draw_grid(fb: &mut FrameBuffer, layout: &PointerLayout) {
    let n = BOARD_SIZE as u32;
    let (w, h) = (layout.cell_width, layout.cell_height);
    let (right, bottom) = (u32::from(w) * n, u32::from(h) * n);
    for y in (0..fb.height()).take_while(|y| u32::from(*y) <= bottom) {
        for x in (0..fb.width()).take_while(|x| u32::from(*x) <= right) {
            let ch = match (x % w == 0, y % h == 0) {
                (true, true) => '+',
                (true, false) => '|',
                (false, true) => '-',
                (false, false) => continue,
            };
            fb.put_char(x, y, ch, false);
        }
    }
}

// Draw `sprite` inside the cell, clipped to its interior.
fn blit(fb: &mut FrameBuffer, layout: &PointerLayout, sprite: &Sprite, col: u16, row: u16) {
    let (x0, y0) = layout.origin(col, row);
    let max_w = usize::from(layout.cell_width.saturating_sub(1));
    let max_h = usize::from(layout.cell_height.saturating_sub(1));
    for (dy, line) in sprite.lines().iter().take(max_h).enumerate() {
        let text: String = line.chars().take(max_w).collect();
        let y = u16::try_from(dy).map_or(u16::MAX, |dy| y0.saturating_add(1).saturating_add(dy));
        fb.put_str(x0.saturating_add(1), y, &text, sprite.bold());
    }
}
