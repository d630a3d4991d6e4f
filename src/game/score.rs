//! Score bookkeeping.

/// Non-negative count of obstacles passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    score: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u32 {
        self.score
    }

    /// Set the score. Negative values clamp to 0; values beyond `u32::MAX` saturate.
    pub fn set(&mut self, score: i64) {
        self.score = score.clamp(0, u32::MAX as i64) as u32;
    }

    pub fn increment(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }
}
