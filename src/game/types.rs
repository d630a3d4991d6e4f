//! Game state owned by the loop.

use super::character::{Character, Skin};
use super::entity::Entity;
use super::obstacle::{initial_gap_offset, Obstacle};
use super::score::ScoreTracker;
use crate::core::config::GameConfig;
use crate::core::constants::OBSTACLE_SPAWN_X;
use rand::Rng;

/// Which screen the loop is on. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Playing,
    GameOver,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct Game {
    pub mode: GameMode,
    /// Kept out of the obstacle list so it survives list resets untouched.
    pub character: Character,
    /// Active obstacles, oldest first.
    pub obstacles: Vec<Obstacle>,
    pub score: ScoreTracker,
    /// Seconds of play since the last start.
    pub elapsed: f32,
    /// Cached from config; every spawned obstacle uses it.
    pub obstacle_speed: f32,
}

impl Game {
    /// Create a game on the menu screen with one obstacle waiting at the right edge.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let skin = Skin::from_index(config.starting_skin);
        let obstacle_speed = config.obstacle_speed;
        Self {
            mode: GameMode::Menu,
            character: Character::new(skin),
            obstacles: vec![Obstacle::with_speed(
                OBSTACLE_SPAWN_X,
                initial_gap_offset(rng),
                obstacle_speed,
            )],
            score: ScoreTracker::new(),
            elapsed: 0.0,
            obstacle_speed,
        }
    }

    /// Currently selected skin.
    pub fn skin(&self) -> Skin {
        self.character.skin()
    }

    /// Select a skin for the character.
    pub fn select_skin(&mut self, skin: Skin) {
        self.character.set_skin(skin);
    }

    /// Full reset back to the menu: fresh character in the selected skin,
    /// one fresh obstacle, score 0.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.character = Character::new(self.skin());
        self.obstacles.clear();
        self.obstacles.push(Obstacle::with_speed(
            OBSTACLE_SPAWN_X,
            initial_gap_offset(rng),
            self.obstacle_speed,
        ));
        self.score.reset();
        self.elapsed = 0.0;
        self.mode = GameMode::Menu;
    }

    /// All entities in draw order: the character, then obstacles.
    pub fn entities(&self) -> impl Iterator<Item = &dyn Entity> + '_ {
        std::iter::once(&self.character as &dyn Entity)
            .chain(self.obstacles.iter().map(|o| o as &dyn Entity))
    }

    pub fn entities_mut(&mut self) -> impl Iterator<Item = &mut dyn Entity> + '_ {
        std::iter::once(&mut self.character as &mut dyn Entity)
            .chain(self.obstacles.iter_mut().map(|o| o as &mut dyn Entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::EntityKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn new_game() -> Game {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        Game::new(&GameConfig::default(), &mut rng)
    }

    #[test]
    fn test_new_game_defaults() {
        let game = new_game();
        assert_eq!(game.mode, GameMode::Menu);
        assert_eq!(game.skin(), Skin::Plane);
        assert_eq!(game.score.get(), 0);
        assert_eq!(game.obstacles.len(), 1);
        assert_eq!(game.obstacles[0].x, OBSTACLE_SPAWN_X);
        assert_eq!(game.elapsed, 0.0);
    }

    #[test]
    fn test_starting_skin_from_config() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let config = GameConfig {
            starting_skin: 2,
            ..Default::default()
        };
        let game = Game::new(&config, &mut rng);
        assert_eq!(game.skin(), Skin::Balloon);
    }

    #[test]
    fn test_entities_order_and_kinds() {
        let mut game = new_game();
        game.obstacles.push(Obstacle::new(500.0, 120.0));
        let kinds: Vec<EntityKind> = game.entities().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                EntityKind::Character,
                EntityKind::Obstacle,
                EntityKind::Obstacle
            ]
        );
    }

    #[test]
    fn test_reset_keeps_skin() {
        let mut game = new_game();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        game.select_skin(Skin::Bird);
        game.character.set_position(40.0, 10.0);
        game.score.set(12);
        game.obstacles.push(Obstacle::new(10.0, 10.0));
        game.mode = GameMode::GameOver;

        game.reset(&mut rng);

        assert_eq!(game.mode, GameMode::Menu);
        assert_eq!(game.skin(), Skin::Bird);
        assert_eq!(game.score.get(), 0);
        assert_eq!(game.obstacles.len(), 1);
        assert_eq!(game.character.position(), Character::new(Skin::Bird).position());
    }
}
