//! Scrolling obstacles and their randomized spawn positions.

use super::entity::{Bounds, Entity, EntityKind, VisualHandle};
use crate::core::constants::{
    CEILING_GAP_MAX, CEILING_GAP_MIN, FLOOR_GAP_MAX, FLOOR_GAP_MIN, OBSTACLE_HEIGHT,
    OBSTACLE_SPEED, OBSTACLE_WIDTH,
};
use rand::Rng;

/// A pipe moving left at constant speed.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge (float for smooth scrolling).
    pub x: f32,
    /// Top edge; where the pipe sits vertically, which decides the gap.
    pub gap_offset: f32,
    /// Leftward speed in units/s (always positive).
    speed: f32,
}

impl Obstacle {
    pub fn new(x: f32, gap_offset: f32) -> Self {
        Self::with_speed(x, gap_offset, OBSTACLE_SPEED)
    }

    /// Non-positive or non-finite speeds fall back to the default so the
    /// obstacle always moves left.
    pub fn with_speed(x: f32, gap_offset: f32, speed: f32) -> Self {
        let speed = if speed.is_finite() && speed > 0.0 {
            speed
        } else {
            OBSTACLE_SPEED
        };
        Self {
            x,
            gap_offset,
            speed,
        }
    }

    /// Horizontal velocity (negative = leftward).
    pub fn velocity(&self) -> f32 {
        -self.speed
    }

    /// Right edge has crossed the left screen boundary.
    pub fn is_off_screen(&self) -> bool {
        self.x + OBSTACLE_WIDTH < 0.0
    }
}

impl Entity for Obstacle {
    fn kind(&self) -> EntityKind {
        EntityKind::Obstacle
    }

    fn position(&self) -> (f32, f32) {
        (self.x, self.gap_offset)
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.gap_offset, OBSTACLE_WIDTH, OBSTACLE_HEIGHT)
    }

    fn visual(&self) -> VisualHandle {
        VisualHandle::OBSTACLE
    }

    fn update(&mut self, dt: f32) {
        self.x -= self.speed * dt;
    }
}

/// Gap offset for the first obstacle of a round: always a floor pipe.
pub fn initial_gap_offset<R: Rng>(rng: &mut R) -> f32 {
    rng.gen_range(FLOOR_GAP_MIN..FLOOR_GAP_MAX)
}

/// Gap offset for a recycled obstacle: a fair coin picks a floor pipe or a
/// ceiling pipe.
pub fn recycled_gap_offset<R: Rng>(rng: &mut R) -> f32 {
    if rng.gen_bool(0.5) {
        rng.gen_range(FLOOR_GAP_MIN..FLOOR_GAP_MAX)
    } else {
        rng.gen_range(CEILING_GAP_MIN..CEILING_GAP_MAX)
    }
}
