//! Drawable sprites, built once at start-up and lent to the renderer.

use crate::{Cell, Player};

/// A block of text drawn at a cell's interior origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    lines: Vec<&'static str>,
    bold: bool,
}

impl Sprite {
    fn new(lines: &[&'static str], bold: bool) -> Self {
        Self {
            lines: lines.to_vec(),
            bold,
        }
    }

    pub fn lines(&self) -> &[&'static str] {
        &self.lines
    }

    pub fn bold(&self) -> bool {
        self.bold
    }
}

/// Registry of every sprite the pointer front end draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    x: Sprite,
    o: Sprite,
    empty: Sprite,
    pub turn: Sprite,
    pub won: Sprite,
    pub congrats: Sprite,
    pub draw: Sprite,
    pub restart: Sprite,
}

impl Assets {
    pub fn load() -> Self {
        Self {
            x: Sprite::new(&[" \\   /", "   X", " /   \\"], true),
            o: Sprite::new(&[" .---.", " |   |", " '---'"], true),
            empty: Sprite::new(&[], false),
            turn: Sprite::new(&["", "TO MOVE"], false),
            won: Sprite::new(&["", "WINS!"], true),
            congrats: Sprite::new(&["", "CONGRATS"], false),
            draw: Sprite::new(&["", "DRAW"], true),
            restart: Sprite::new(&["", "RESTART", "[click]"], false),
        }
    }

    /// Sprite for a cell owner.
    pub fn symbol(&self, cell: Cell) -> &Sprite {
        match cell {
            Cell::Taken(Player::X) => &self.x,
            Cell::Taken(Player::O) => &self.o,
            Cell::Empty => &self.empty,
        }
    }
}
