// ============================================================================
// Floating-Point Comparisons
// ============================================================================

// Small value for floating-point comparisons (near-zero checks, division guards).
pub const PHYSICS_EPSILON: f32 = 1e-6;

// ============================================================================
// Grid & Viewport
// ============================================================================

pub const TILE_SIZE: f32 = 20.0; // Each grid cell edge in world pixels
pub const VIEW_WIDTH: f32 = 800.0; // Renderer viewport width (pixels)
pub const VIEW_HEIGHT: f32 = 600.0; // Renderer viewport height (pixels)

// ============================================================================
// Player
// ============================================================================

// Bounding box edge (pixels) - smaller than a tile so corridors are passable
pub const PLAYER_SIZE: f32 = TILE_SIZE / 1.5;

// Speed (pixels per second); applied per axis, diagonals are not normalized
pub const PLAYER_SPEED: f32 = 180.0;

// ============================================================================
// Enemies
// ============================================================================

pub const ENEMY_SIZE: f32 = TILE_SIZE / 1.5;

// Base speed (pixels per second); modulated by distance to the player
pub const ENEMY_BASE_SPEED: f32 = 120.0;
pub const ENEMY_FAR_MULTIPLIER: f32 = 1.5; // outside the chase radius
pub const ENEMY_NEAR_MULTIPLIER: f32 = 0.5; // inside the chase radius
pub const CHASE_RADIUS_RATIO: f32 = 1.2; // chase radius = ratio * light radius

// Distance (pixels) at which a path waypoint counts as reached
pub const WAYPOINT_THRESHOLD: f32 = 2.0;

// ============================================================================
// Lighting & Sanity
// ============================================================================

pub const LIGHT_RADIUS_MAX: f32 = 150.0; // radius at full sanity
pub const LIGHT_RADIUS_MIN: f32 = 40.0; // radius floor once sanity is gone

pub const SANITY_MAX: f32 = 100.0;
pub const SANITY_DECAY_STEP: f32 = 0.25; // per decay tick, clamped at zero

// Color channel bounds (0-255)
pub const FLOOR_CHANNEL_MAX: f32 = 255.0;
pub const WALL_CHANNEL_MIN: f32 = 30.0; // walls never go fully dark
pub const WALL_CHANNEL_MAX: f32 = 100.0; // walls never outshine lit floors

// Flat channels for the no-darkness debug mode
pub const DEBUG_WALL_CHANNEL: u8 = 100;
pub const DEBUG_FLOOR_CHANNEL: u8 = 180;

// Enemies become visible this far inside the light radius
pub const ENEMY_VISIBILITY_INSET: f32 = 5.0;

// ============================================================================
// Camera
// ============================================================================

// Exponential smoothing divisor: camera += (target - camera) / SMOOTHING
pub const CAMERA_SMOOTHING: f32 = 8.0;
