//! Pointer-driven game loop.

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::{debug, info};

use super::assets::Assets;
use super::layout::PointerLayout;
use super::render::render;
use super::term::TerminalRenderer;
use crate::{GameEngine, GameStatus};

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    Marked(GameStatus),
    Restarted,
    Ignored,
}

/// One pointer-driven game; assets are borrowed from the caller.
pub struct PointerApp<'a> {
    engine: GameEngine,
    layout: PointerLayout,
    assets: &'a Assets,
}

impl<'a> PointerApp<'a> {
    pub fn new(layout: PointerLayout, assets: &'a Assets) -> Self {
        Self {
            engine: GameEngine::new(),
            layout,
            assets,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Handle a primary-button press at screen coordinates (`x`, `y`).
    ///
    /// Rejected moves are ignored; the next click simply tries again.
    pub fn click(&mut self, x: u16, y: u16) -> Click {
        if self.engine.is_finished() {
            if self.layout.in_restart_region(x, y) {
                self.restart();
                return Click::Restarted;
            }
            return Click::Ignored;
        }
        let Some(pos) = self.layout.cell_at(x, y) else {
            return Click::Ignored;
        };
        match self.engine.play(pos) {
            Ok(status) => {
                debug!("marked {} -> {:?}", pos, status);
                if status != GameStatus::InProgress {
                    info!("pointer game finished: {:?}", status);
                }
                Click::Marked(status)
            }
            Err(e) => {
                debug!("ignored click at {}: {}", pos, e);
                Click::Ignored
            }
        }
    }

    pub fn restart(&mut self) {
        info!("pointer game restarted");
        self.engine.restart();
    }

    /// Run until the user quits. Restores the terminal even on error.
    pub fn run(&mut self) -> Result<()> {
        let mut term = TerminalRenderer::new();
        term.enter()?;
        let result = self.event_loop(&mut term);
        let _ = term.exit();
        result
    }

    fn event_loop(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        info!("pointer game started");
        loop {
            term.draw(&render(&self.engine, &self.layout, self.assets))?;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
                        && self.engine.is_finished()
                    {
                        self.restart();
                    }
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    self.click(column, row);
                }
                _ => {}
            }
        }
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
