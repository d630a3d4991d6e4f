//! Utility modules: data directory helpers and the save file.

pub mod persistence;
pub mod save_file;

pub use save_file::{load_game, save_game, SaveError, SaveRecord};
