/// Default playfield width in world units (pixels)
pub const DEFAULT_WIDTH: i32 = 600;

/// Default playfield height in world units (pixels)
pub const DEFAULT_HEIGHT: i32 = 400;

/// Side length of one grid cell; positions are multiples of this
pub const DEFAULT_CELL_SIZE: i32 = 20;

/// Score awarded per food eaten
pub const FOOD_REWARD: u32 = 10;

/// Ascending score thresholds; index i is the threshold for level i+1
pub const LEVEL_THRESHOLDS: [u32; 4] = [0, 50, 100, 150];

/// Obstacles placed per level, parallel to LEVEL_THRESHOLDS
pub const OBSTACLE_COUNTS: [u32; 4] = [0, 3, 6, 10];

/// Steps-per-second hint at level 1
pub const BASE_SPEED: u32 = 10;

/// Speed gained per level past the first
pub const SPEED_STEP: u32 = 2;
