#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "bincode")]
use bincode::{Decode, Encode};

use bevy_ecs::component::Component;
use bevy_math::Vec2;

use crate::tiles::{Tile, TileCoord};

// Macro to reduce boilerplate for snapshot structs
macro_rules! view {
    ($(#[$meta:meta])* struct $name:ident $body:tt) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        #[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "bincode", derive(Encode, Decode))]
        pub struct $name $body
    };
}

// ============================================================================
// Common Data Types
// ============================================================================

// Continuous world position in pixels (entity center)
#[derive(Debug, Clone, Copy, Component, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bincode", derive(Encode, Decode))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        self.to_vec2().distance(other.to_vec2())
    }
}

// Enemy ID component - identifies which enemy an entity represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Component)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bincode", derive(Encode, Decode))]
pub struct EnemyId(pub u32);

// ============================================================================
// Input Intents
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bincode", derive(Encode, Decode))]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

// Latest held-key state; ticks consume whatever is buffered here (no queue).
// Opposite keys cancel; up+left moves diagonally at full per-axis speed.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bincode", derive(Encode, Decode))]
pub struct MovementIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementIntent {
    pub const fn set(&mut self, direction: MoveDirection, pressed: bool) {
        match direction {
            MoveDirection::Up => self.up = pressed,
            MoveDirection::Down => self.down = pressed,
            MoveDirection::Left => self.left = pressed,
            MoveDirection::Right => self.right = pressed,
        }
    }

    // Per-axis velocity; deliberately not normalized on diagonals
    #[must_use]
    pub fn to_velocity(self, speed: f32) -> Vec2 {
        let mut vel = Vec2::ZERO;
        if self.up {
            vel.y -= speed;
        }
        if self.down {
            vel.y += speed;
        }
        if self.left {
            vel.x -= speed;
        }
        if self.right {
            vel.x += speed;
        }
        vel
    }
}

// ============================================================================
// Render Snapshot
// ============================================================================

view! {
// One tile inside the visible window, with its computed lighting channel.
struct TileView {
    pub coord: TileCoord,
    pub tile: Tile,
    pub channel: u8,
}
}

view! {
struct PlayerView {
    pub pos: Position,
    pub size: f32,
    pub ghost_mode: bool,
}
}

view! {
// red is None while the enemy sits outside the light radius (still simulated)
struct EnemyView {
    pub id: EnemyId,
    pub pos: Position,
    pub size: f32,
    pub red: Option<u8>,
}
}

view! {
// Immutable world snapshot published at the end of each movement tick.
// `tick` increases monotonically and doubles as the renderer dirty signal.
struct Snapshot {
    pub tick: u64,
    pub camera: Position,
    pub tiles: Vec<TileView>,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub sanity_fraction: f32,
    pub debug_mode: bool,
}
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            tick: 0,
            camera: Position::new(0.0, 0.0),
            tiles: Vec::new(),
            player: PlayerView {
                pos: Position::new(0.0, 0.0),
                size: 0.0,
                ghost_mode: false,
            },
            enemies: Vec::new(),
            sanity_fraction: 1.0,
            debug_mode: false,
        }
    }
}
