//! The player-controlled character and its selectable skins.

use super::entity::{Bounds, Entity, EntityKind, VisualHandle};
use crate::core::constants::{
    CHARACTER_HEIGHT, CHARACTER_START_X, CHARACTER_START_Y, CHARACTER_WIDTH,
};

/// Number of selectable skins.
pub const SKIN_COUNT: usize = 3;

/// Selectable visual/behavioral profile for the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skin {
    Bird,
    Plane,
    Balloon,
}

impl Skin {
    pub const ALL: [Skin; SKIN_COUNT] = [Skin::Bird, Skin::Plane, Skin::Balloon];

    /// Skin at `index`, wrapping out-of-range values.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % SKIN_COUNT]
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Bird => 0,
            Self::Plane => 1,
            Self::Balloon => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bird => "Bird",
            Self::Plane => "Plane",
            Self::Balloon => "Balloon",
        }
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(&self) -> Self {
        Self::from_index(self.index() + SKIN_COUNT - 1)
    }

    /// Downward acceleration in units/s².
    pub fn gravity(&self) -> f32 {
        match self {
            Self::Bird => 900.0,
            Self::Plane => 300.0,
            Self::Balloon => 350.0,
        }
    }

    /// Magnitude of the velocity a flap sets, in units/s.
    pub fn flap_impulse(&self) -> f32 {
        match self {
            Self::Bird => 320.0,
            Self::Plane => 180.0,
            Self::Balloon => 220.0,
        }
    }

    /// Whether this skin is steered with separate up and down keys.
    pub fn is_bidirectional(&self) -> bool {
        matches!(self, Self::Plane)
    }

    pub fn visual(&self) -> VisualHandle {
        VisualHandle::skin(self.index())
    }
}

/// Direction of a flap impulse. Up is screen-up (negative y).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlapDirection {
    Up,
    Down,
}

/// The player character.
#[derive(Debug, Clone)]
pub struct Character {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity in units/s (positive = downward).
    pub velocity: f32,
    skin: Skin,
    // Cached skin parameters
    gravity: f32,
    flap_impulse: f32,
}

impl Character {
    /// Create a character at the spawn point wearing `skin`.
    pub fn new(skin: Skin) -> Self {
        Self {
            x: CHARACTER_START_X,
            y: CHARACTER_START_Y,
            velocity: 0.0,
            skin,
            gravity: skin.gravity(),
            flap_impulse: skin.flap_impulse(),
        }
    }

    pub fn skin(&self) -> Skin {
        self.skin
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn flap_impulse(&self) -> f32 {
        self.flap_impulse
    }

    /// Swap the skin and re-derive gravity and impulse from it.
    pub fn set_skin(&mut self, skin: Skin) {
        self.skin = skin;
        self.gravity = skin.gravity();
        self.flap_impulse = skin.flap_impulse();
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Set vertical velocity to the skin's impulse, replacing the current value.
    /// Downward flaps only apply to bidirectional skins.
    pub fn flap(&mut self, direction: FlapDirection) {
        match direction {
            FlapDirection::Up => self.velocity = -self.flap_impulse,
            FlapDirection::Down if self.skin.is_bidirectional() => {
                self.velocity = self.flap_impulse
            }
            FlapDirection::Down => {}
        }
    }

    /// Keep the character inside `[0, world_height]`, stopping it at the edge.
    pub fn clamp_vertical(&mut self, world_height: f32) {
        let max_y = world_height - CHARACTER_HEIGHT;
        if self.y < 0.0 {
            self.y = 0.0;
            self.velocity = self.velocity.max(0.0);
        } else if self.y > max_y {
            self.y = max_y;
            self.velocity = self.velocity.min(0.0);
        }
    }
}

impl Entity for Character {
    fn kind(&self) -> EntityKind {
        EntityKind::Character
    }

    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, CHARACTER_WIDTH, CHARACTER_HEIGHT)
    }

    fn visual(&self) -> VisualHandle {
        self.skin.visual()
    }

    fn update(&mut self, dt: f32) {
        self.velocity += self.gravity * dt;
        self.y += self.velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skin_cycle_is_bijection() {
        for skin in Skin::ALL {
            assert_eq!(skin.next().previous(), skin);
            assert_eq!(skin.previous().next(), skin);
        }
    }

    #[test]
    fn test_skin_next_wraps() {
        assert_eq!(Skin::Balloon.next(), Skin::Bird);
        assert_eq!(Skin::Bird.previous(), Skin::Balloon);
    }

    #[test]
    fn test_skin_from_index_wraps() {
        assert_eq!(Skin::from_index(0), Skin::Bird);
        assert_eq!(Skin::from_index(1), Skin::Plane);
        assert_eq!(Skin::from_index(2), Skin::Balloon);
        assert_eq!(Skin::from_index(3), Skin::Bird);
        for skin in Skin::ALL {
            assert_eq!(Skin::from_index(skin.index()), skin);
        }
    }

    #[test]
    fn test_only_plane_is_bidirectional() {
        assert!(!Skin::Bird.is_bidirectional());
        assert!(Skin::Plane.is_bidirectional());
        assert!(!Skin::Balloon.is_bidirectional());
    }

    #[test]
    fn test_flap_up_overwrites_velocity() {
        for skin in Skin::ALL {
            for prior in [-500.0, 0.0, 750.0] {
                let mut c = Character::new(skin);
                c.velocity = prior;
                c.flap(FlapDirection::Up);
                assert_eq!(c.velocity, -skin.flap_impulse());
            }
        }
    }

    #[test]
    fn test_flap_down_bidirectional_only() {
        let mut plane = Character::new(Skin::Plane);
        plane.flap(FlapDirection::Down);
        assert_eq!(plane.velocity, Skin::Plane.flap_impulse());

        let mut bird = Character::new(Skin::Bird);
        bird.velocity = -12.0;
        bird.flap(FlapDirection::Down);
        assert_eq!(bird.velocity, -12.0);
    }

    #[test]
    fn test_update_integrates_gravity() {
        let mut c = Character::new(Skin::Bird);
        let y0 = c.y;
        c.update(0.1);
        assert!((c.velocity - 90.0).abs() < 1e-3);
        assert!((c.y - (y0 + 9.0)).abs() < 1e-3);
    }

    #[test]
    fn test_set_skin_rederives_constants() {
        let mut c = Character::new(Skin::Bird);
        c.set_skin(Skin::Balloon);
        assert_eq!(c.skin(), Skin::Balloon);
        assert_eq!(c.gravity(), Skin::Balloon.gravity());
        assert_eq!(c.flap_impulse(), Skin::Balloon.flap_impulse());
        assert_eq!(c.visual(), VisualHandle::skin(2));
    }

    #[test]
    fn test_clamp_vertical() {
        let mut c = Character::new(Skin::Bird);
        c.y = -20.0;
        c.velocity = -100.0;
        c.clamp_vertical(600.0);
        assert_eq!(c.y, 0.0);
        assert_eq!(c.velocity, 0.0);

        c.y = 700.0;
        c.velocity = 100.0;
        c.clamp_vertical(600.0);
        assert_eq!(c.y, 600.0 - CHARACTER_HEIGHT);
        assert_eq!(c.velocity, 0.0);
    }

    #[test]
    fn test_bounds_follow_position() {
        let mut c = Character::new(Skin::Plane);
        c.set_position(12.5, 300.0);
        let b = c.bounds();
        assert_eq!((b.x, b.y), (12.5, 300.0));
        assert_eq!((b.width, b.height), (CHARACTER_WIDTH, CHARACTER_HEIGHT));
        assert_eq!(c.kind(), EntityKind::Character);
    }
}
