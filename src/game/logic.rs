//! State machine and per-frame simulation.

use super::character::FlapDirection;
use super::entity::Entity;
use super::obstacle::{recycled_gap_offset, Obstacle};
use super::types::{Game, GameMode};
use crate::core::constants::{OBSTACLE_SPAWN_X, WORLD_HEIGHT};
use rand::Rng;

/// UI-agnostic key presses the state machine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    /// Start from the menu, flap on single-key skins, restart after a crash.
    Start,
    Left,
    Right,
    Up,
    Down,
}

/// Polled "is this key held right now" query supplied by the front end.
pub trait KeyboardState {
    fn is_held(&self, key: GameKey) -> bool;
}

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// An off-screen obstacle was replaced; `score` is the new total.
    ObstacleRecycled { score: u32 },
    Collision,
}

/// Dispatch a discrete key press according to the current mode.
pub fn process_key<R: Rng>(game: &mut Game, key: GameKey, rng: &mut R) {
    match game.mode {
        GameMode::Menu => match key {
            GameKey::Start => {
                game.mode = GameMode::Playing;
                game.elapsed = 0.0;
                log::debug!("Menu -> Playing as {}", game.skin().name());
            }
            GameKey::Right => {
                let skin = game.skin().next();
                game.select_skin(skin);
            }
            GameKey::Left => {
                let skin = game.skin().previous();
                game.select_skin(skin);
            }
            GameKey::Up | GameKey::Down => {}
        },
        GameMode::Playing => {
            if game.skin().is_bidirectional() {
                match key {
                    GameKey::Up => game.character.flap(FlapDirection::Up),
                    GameKey::Down => game.character.flap(FlapDirection::Down),
                    _ => {}
                }
            } else if key == GameKey::Start {
                game.character.flap(FlapDirection::Up);
            }
        }
        GameMode::GameOver => {
            if key == GameKey::Start {
                game.reset(rng);
                log::debug!("GameOver -> Menu");
            }
        }
    }
}

/// Continuous steering for bidirectional skins while playing.
pub fn process_held_keys<K: KeyboardState>(game: &mut Game, keys: &K) {
    if game.mode != GameMode::Playing || !game.skin().is_bidirectional() {
        return;
    }
    if keys.is_held(GameKey::Up) {
        game.character.flap(FlapDirection::Up);
    }
    if keys.is_held(GameKey::Down) {
        game.character.flap(FlapDirection::Down);
    }
}

/// Advance one frame of `dt` seconds: move, recycle, then collide.
/// Does nothing outside of `Playing`.
pub fn process_tick<R: Rng>(game: &mut Game, dt: f32, rng: &mut R) -> Vec<TickEvent> {
    let mut events = Vec::new();
    if game.mode != GameMode::Playing {
        return events;
    }
    let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

    game.elapsed += dt;
    for entity in game.entities_mut() {
        entity.update(dt);
    }
    game.character.clamp_vertical(WORLD_HEIGHT);

    recycle_obstacles(game, rng, &mut events);

    if check_collisions(game) {
        game.mode = GameMode::GameOver;
        events.push(TickEvent::Collision);
        log::info!(
            "Collision after {:.1}s, final score {}",
            game.elapsed,
            game.score.get()
        );
    }

    events
}

/// Replace every obstacle whose right edge crossed the left boundary with a
/// fresh one at the spawn edge, scoring one point each.
fn recycle_obstacles<R: Rng>(game: &mut Game, rng: &mut R, events: &mut Vec<TickEvent>) {
    let before = game.obstacles.len();
    game.obstacles.retain(|o| !o.is_off_screen());
    let recycled = before - game.obstacles.len();

    for _ in 0..recycled {
        game.obstacles.push(Obstacle::with_speed(
            OBSTACLE_SPAWN_X,
            recycled_gap_offset(rng),
            game.obstacle_speed,
        ));
        game.score.increment();
        let score = game.score.get();
        log::trace!("Obstacle recycled, score {}", score);
        events.push(TickEvent::ObstacleRecycled { score });
    }
}

/// Whether the character overlaps any obstacle.
pub fn check_collisions(game: &Game) -> bool {
    let character = game.character.bounds();
    game.obstacles
        .iter()
        .any(|o| character.intersects(&o.bounds()))
}
