#![cfg_attr(not(feature = "std"), no_std)]

mod board;
mod common;
mod config;
mod game;
mod player;
#[cfg(feature = "std")]
mod console;
#[cfg(feature = "std")]
pub mod gui;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use player::*;
#[cfg(feature = "std")]
pub use console::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
