//! Core constants and configuration shared by the game and the front end.

pub mod config;
pub mod constants;

pub use config::GameConfig;
pub use constants::*;
