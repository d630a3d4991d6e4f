//! Shared capability interface for everything the loop draws and updates.

/// Axis-aligned bounding box in world units (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap test: boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Whether the point lies inside the box (right/bottom edges exclusive).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Discriminator for the two entity variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Character,
    Obstacle,
}

/// Opaque reference to a visual asset. The game never interprets it;
/// the front end resolves it against its asset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualHandle(pub u16);

impl VisualHandle {
    pub const BACKGROUND: VisualHandle = VisualHandle(0);
    pub const OBSTACLE: VisualHandle = VisualHandle(1);

    /// Handle for a character skin.
    pub fn skin(index: usize) -> Self {
        VisualHandle(16 + index as u16)
    }
}

/// A positioned, drawable, updatable game object.
pub trait Entity {
    fn kind(&self) -> EntityKind;

    /// Top-left corner in world units.
    fn position(&self) -> (f32, f32);

    fn bounds(&self) -> Bounds;

    fn visual(&self) -> VisualHandle;

    /// Advance by `dt` seconds.
    fn update(&mut self, dt: f32);
}
