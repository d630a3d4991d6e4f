//! Plain-text save record: `x y score`, space separated, newline terminated.
//!
//! Loading is best effort. A missing or malformed file leaves the game in its
//! default state.

use crate::game::{Entity, Game};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Character position and score as stored on disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaveRecord {
    pub x: f32,
    pub y: f32,
    pub score: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SaveError {
    #[error("save file is empty")]
    Empty,
    #[error("save file is missing the {0} field")]
    MissingField(&'static str),
    #[error("invalid {field} value {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

fn parse_field<T: FromStr>(
    fields: &mut std::str::SplitWhitespace<'_>,
    name: &'static str,
) -> Result<T, SaveError> {
    let raw = fields.next().ok_or(SaveError::MissingField(name))?;
    raw.parse().map_err(|_| SaveError::InvalidNumber {
        field: name,
        value: raw.to_string(),
    })
}

impl SaveRecord {
    /// Snapshot the character position and score.
    pub fn from_game(game: &Game) -> Self {
        let (x, y) = game.character.position();
        Self {
            x,
            y,
            score: game.score.get(),
        }
    }

    /// Parse a record. Trailing data after the three fields is ignored;
    /// a negative score clamps to 0.
    pub fn parse(text: &str) -> Result<Self, SaveError> {
        if text.trim().is_empty() {
            return Err(SaveError::Empty);
        }
        let mut fields = text.split_whitespace();
        let x: f32 = parse_field(&mut fields, "x")?;
        let y: f32 = parse_field(&mut fields, "y")?;
        let score: i64 = parse_field(&mut fields, "score")?;
        for (name, value) in [("x", x), ("y", y)] {
            if !value.is_finite() {
                return Err(SaveError::InvalidNumber {
                    field: name,
                    value: value.to_string(),
                });
            }
        }
        Ok(Self {
            x,
            y,
            score: score.clamp(0, u32::MAX as i64) as u32,
        })
    }

    /// Put the character and score back where they were saved.
    pub fn apply(&self, game: &mut Game) {
        game.character.set_position(self.x, self.y);
        game.score.set(self.score as i64);
    }
}

impl fmt::Display for SaveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} {}", self.x, self.y, self.score)
    }
}

/// Write the game's save record to `path`.
pub fn save_game(path: &Path, game: &Game) -> io::Result<()> {
    let record = SaveRecord::from_game(game);
    fs::write(path, record.to_string())?;
    log::info!("Saved {} to {}", record.to_string().trim_end(), path.display());
    Ok(())
}

/// Restore the save at `path` into `game`. Returns whether anything was loaded.
pub fn load_game(path: &Path, game: &mut Game) -> bool {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return false,
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            return false;
        }
    };
    match SaveRecord::parse(&text) {
        Ok(record) => {
            record.apply(game);
            log::info!("Loaded save from {}", path.display());
            true
        }
        Err(e) => {
            log::warn!("Ignoring save {}: {}", path.display(), e);
            false
        }
    }
}
