//! Flapper - a side-scrolling flap-through-the-pipes arcade game.
//!
//! The library holds the whole game core so it can be tested without a
//! terminal; the `flapper` binary is a thin crossterm/ratatui front end.

pub mod core;
pub mod game;
pub mod input;
pub mod ui;
pub mod utils;

pub use crate::core::GameConfig;
pub use game::{Game, GameKey, GameMode};
