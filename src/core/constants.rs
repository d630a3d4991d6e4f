// World dimensions (screen space: x grows right, y grows down)
pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 600.0;

// Frame timing
pub const FRAME_INTERVAL_MS: u64 = 16;
/// Longest frame step the front end feeds the simulation.
pub const MAX_FRAME_SECONDS: f32 = 0.1;

// Character
pub const CHARACTER_WIDTH: f32 = 34.0;
pub const CHARACTER_HEIGHT: f32 = 24.0;
pub const CHARACTER_START_X: f32 = 100.0;
pub const CHARACTER_START_Y: f32 = 300.0;
pub const DEFAULT_SKIN_INDEX: usize = 1;

// Obstacles
pub const OBSTACLE_WIDTH: f32 = 52.0;
pub const OBSTACLE_HEIGHT: f32 = 400.0;
pub const OBSTACLE_SPEED: f32 = 200.0;
pub const OBSTACLE_SPAWN_X: f32 = WORLD_WIDTH;
/// Top edge range for a pipe rising from the floor.
pub const FLOOR_GAP_MIN: f32 = 100.0;
pub const FLOOR_GAP_MAX: f32 = 400.0;
/// Top edge range for a pipe hanging from the ceiling (bottom edge lands in 100..400).
pub const CEILING_GAP_MIN: f32 = -300.0;
pub const CEILING_GAP_MAX: f32 = 0.0;

// Persistence
pub const DATA_DIR_NAME: &str = ".flapper";
pub const SAVE_FILE_NAME: &str = "savegame.txt";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "flapper.log";

// Input
/// How long a key counts as held after its last press/repeat on terminals
/// that never report key releases.
pub const KEY_HOLD_WINDOW_MS: u64 = 150;
