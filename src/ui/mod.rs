//! Terminal rendering.

pub mod assets;
pub mod game_common;
pub mod game_scene;

use crate::game::Game;
use assets::Assets;
use ratatui::Frame;

/// Draw one frame of the game.
pub fn draw_ui(frame: &mut Frame, game: &Game, assets: &Assets) {
    let area = frame.size();
    game_scene::render_game(frame, area, game, assets);
}
