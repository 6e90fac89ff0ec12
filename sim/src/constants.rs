use common::tiles::TileCoord;

// ============================================================================
// Tick Rates
// ============================================================================

pub const MOVEMENT_TICK_HZ: u64 = 60; // player/camera/enemy updates
pub const DECAY_TICK_HZ: u64 = 10; // sanity decay cadence

// ============================================================================
// Maze Generation
// ============================================================================

// DFS carving starts here; guaranteed floor in every generated maze
pub const START_TILE: TileCoord = TileCoord::new(1, 1);

// Open-room overlay settings
pub const ROOM_COUNT_MIN: u32 = 3;
pub const ROOM_COUNT_MAX: u32 = 6;
pub const ROOM_EXTENT_MIN: i32 = 2;
pub const ROOM_EXTENT_MAX: i32 = 4;

// ============================================================================
// Enemies
// ============================================================================

pub const DEFAULT_ENEMY_COUNT: u32 = 3;

// Minimum Chebyshev tile distance between an enemy spawn and the player start
pub const ENEMY_SPAWN_MIN_DISTANCE: i32 = 6;

// Recompute a cached path once the player tile drifts this far from its goal
pub const REPATH_DRIFT_THRESHOLD: i32 = 2;

// Movement ticks without progress before a cached path is considered stuck
pub const ENEMY_STALL_TICKS: u32 = 30;
