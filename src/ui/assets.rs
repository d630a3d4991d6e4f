//! Terminal stand-ins for the game's visual assets.
//!
//! Visual handles from the game are resolved here into glyphs and colours.
//! Unknown handles degrade to a placeholder instead of failing.

use crate::game::{Skin, VisualHandle, SKIN_COUNT};
use ratatui::style::{Color, Modifier, Style};

/// How a sprite is painted: one glyph repeated over its cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteStyle {
    pub glyph: char,
    pub style: Style,
}

impl SpriteStyle {
    fn new(glyph: char, fg: Color) -> Self {
        Self {
            glyph,
            style: Style::default().fg(fg),
        }
    }
}

fn placeholder() -> SpriteStyle {
    SpriteStyle::new('?', Color::Magenta)
}

/// The fixed asset set: background, label text style, obstacle and one sprite per skin.
#[derive(Debug, Clone)]
pub struct Assets {
    pub background: Style,
    pub text: Style,
    pub obstacle: SpriteStyle,
    pub skins: [SpriteStyle; SKIN_COUNT],
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            background: Style::default().bg(Color::Rgb(20, 40, 80)),
            text: Style::default().fg(Color::White),
            obstacle: SpriteStyle::new('█', Color::Green),
            skins: [
                SpriteStyle::new('►', Color::Yellow),
                SpriteStyle::new('◆', Color::Gray),
                SpriteStyle::new('●', Color::Red),
            ],
        }
    }
}

impl Assets {
    /// Resolve a handle to its sprite; unknown handles get a placeholder.
    pub fn sprite(&self, handle: VisualHandle) -> SpriteStyle {
        if handle == VisualHandle::OBSTACLE {
            return self.obstacle;
        }
        Skin::ALL
            .iter()
            .find(|skin| skin.visual() == handle)
            .map(|skin| self.skins[skin.index()])
            .unwrap_or_else(placeholder)
    }

    /// Style for large headline text.
    pub fn headline(&self) -> Style {
        self.text.add_modifier(Modifier::BOLD)
    }
}
