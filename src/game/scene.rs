//! Per-frame draw list handed to the front end.

use super::entity::{Bounds, Entity, EntityKind, VisualHandle};
use super::types::{Game, GameMode};

pub const MENU_TEXT: &str = "Press SPACE to Start";
pub const SELECT_TEXT: &str = "Use LEFT/RIGHT to select character";
pub const GAME_OVER_TEXT: &str = "Game Over! Press SPACE to Restart";

/// Relative text size; the front end picks the actual font or style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Normal,
    Large,
}

/// A UI string anchored at a world position (top-left).
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: TextSize,
}

impl Label {
    fn new(text: impl Into<String>, x: f32, y: f32, size: TextSize) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            size,
        }
    }
}

/// One draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawItem {
    Background,
    Sprite {
        kind: EntityKind,
        visual: VisualHandle,
        bounds: Bounds,
    },
    Label(Label),
}

/// Ordered draw list: background first, then the mode's visual set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub items: Vec<DrawItem>,
}

impl Scene {
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Label(label) => Some(label),
            _ => None,
        })
    }

    pub fn sprites(&self) -> impl Iterator<Item = (EntityKind, VisualHandle, Bounds)> + '_ {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Sprite {
                kind,
                visual,
                bounds,
            } => Some((*kind, *visual, *bounds)),
            _ => None,
        })
    }
}

impl Game {
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score.get())
    }

    fn skin_text(&self) -> String {
        let skin = self.skin();
        let controls = if skin.is_bidirectional() {
            "UP/DOWN to steer"
        } else {
            "SPACE to flap"
        };
        format!("Character: {} ({})", skin.name(), controls)
    }

    /// Build this frame's draw list.
    pub fn scene(&self) -> Scene {
        let mut items = vec![DrawItem::Background];

        match self.mode {
            GameMode::Playing => {
                items.extend(self.entities().map(|e| DrawItem::Sprite {
                    kind: e.kind(),
                    visual: e.visual(),
                    bounds: e.bounds(),
                }));
                items.push(DrawItem::Label(Label::new(
                    self.score_text(),
                    0.0,
                    0.0,
                    TextSize::Normal,
                )));
            }
            GameMode::Menu => {
                items.push(DrawItem::Label(Label::new(
                    MENU_TEXT,
                    200.0,
                    300.0,
                    TextSize::Large,
                )));
                items.push(DrawItem::Label(Label::new(
                    SELECT_TEXT,
                    150.0,
                    500.0,
                    TextSize::Normal,
                )));
                items.push(DrawItem::Label(Label::new(
                    self.skin_text(),
                    150.0,
                    540.0,
                    TextSize::Normal,
                )));
                // Preview of the selected skin
                items.push(DrawItem::Sprite {
                    kind: self.character.kind(),
                    visual: self.character.visual(),
                    bounds: self.character.bounds(),
                });
            }
            GameMode::GameOver => {
                items.push(DrawItem::Label(Label::new(
                    GAME_OVER_TEXT,
                    100.0,
                    300.0,
                    TextSize::Large,
                )));
                items.push(DrawItem::Label(Label::new(
                    self.score_text(),
                    0.0,
                    0.0,
                    TextSize::Normal,
                )));
            }
        }

        Scene { items }
    }
}
