//! Side-scrolling flap game.
//!
//! The player steers a character through pipes that scroll in from the right.
//! Each pipe that leaves the screen is replaced by a new one and scores a
//! point; touching a pipe ends the run.

pub mod character;
pub mod entity;
pub mod logic;
pub mod obstacle;
pub mod scene;
pub mod score;
pub mod types;

pub use character::{Character, FlapDirection, Skin, SKIN_COUNT};
pub use entity::{Bounds, Entity, EntityKind, VisualHandle};
pub use logic::*;
pub use obstacle::Obstacle;
pub use scene::{DrawItem, Label, Scene, TextSize};
pub use score::ScoreTracker;
pub use types::{Game, GameMode};
