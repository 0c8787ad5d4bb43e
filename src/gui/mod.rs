//! Pointer-driven front end rendered in the terminal.
//!
//! Clicks are mapped to grid cells by integer division of the pointer
//! coordinates by the cell size, ignoring clicks on cell boundaries. Marks and
//! the side panel are drawn from an [`Assets`] registry that the caller builds
//! once and lends to the app.

#![cfg(feature = "std")]

pub mod app;
pub mod assets;
pub mod fb;
pub mod layout;
pub mod render;
pub mod term;

pub use app::{should_quit, Click, PointerApp};
pub use assets::{Assets, Sprite};
pub use fb::{FrameBuffer, Glyph};
pub use layout::PointerLayout;
pub use render::render;
pub use term::{encode_full_into, TerminalRenderer};
