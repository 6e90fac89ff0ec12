use std::collections::VecDeque;

use bevy_ecs::prelude::*;

use common::tiles::TileCoord;

// ============================================================================
// Simulation Components
// ============================================================================

// Cached pursuit path, consumed front-first. `goal` remembers the player tile
// the path was computed for so drift can invalidate it.
#[derive(Component, Debug, Default)]
pub struct EnemyPath {
    pub waypoints: VecDeque<TileCoord>,
    pub goal: Option<TileCoord>,
    pub stall_ticks: u32,
}

impl EnemyPath {
    pub fn set(&mut self, waypoints: Vec<TileCoord>, goal: TileCoord) {
        self.waypoints = VecDeque::from(waypoints);
        self.goal = Some(goal);
        self.stall_ticks = 0;
    }

    pub fn clear(&mut self) {
        self.waypoints.clear();
        self.goal = None;
        self.stall_ticks = 0;
    }
}
