use bevy_ecs::prelude::*;
use bevy_math::Vec2;
use rand::rngs::StdRng;

use common::{
    protocol::{MovementIntent, Snapshot},
    tiles::{Maze, TileCoord},
};

// ============================================================================
// World Resources
// ============================================================================

// The generated maze plus its derived wall index. Generated once at startup;
// read-only for the rest of the process.
#[derive(Resource)]
pub struct MazeMap {
    pub maze: Maze,
    pub wall_index: Vec<TileCoord>,
}

// Latest buffered input state; overwritten between ticks, consumed each tick
#[derive(Resource, Default)]
pub struct IntentState(pub MovementIntent);

// Debug toggles
#[derive(Resource, Default)]
pub struct Modes {
    pub ghost: bool,
    pub debug: bool,
}

// Depleting sanity resource; only the decay schedule writes it
#[derive(Resource)]
pub struct SanityState {
    pub sanity: f32,
}

// Current light radius, recomputed from sanity every decay tick
#[derive(Resource)]
pub struct LightState {
    pub radius: f32,
}

// Camera top-left corner in world pixels, smoothed toward the player
#[derive(Resource)]
pub struct CameraState {
    pub pos: Vec2,
}

// Append-only human-readable event stream for an embedding UI
#[derive(Resource, Default)]
pub struct EventLog(Vec<String>);

impl EventLog {
    pub fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.0)
    }
}

// Seeded simulation RNG (maze generation, wander, spawn placement)
#[derive(Resource)]
pub struct SimRng(pub StdRng);

// Latest published snapshot; replaced at the end of every movement tick
#[derive(Resource, Default)]
pub struct RenderSnapshot(pub Snapshot);
