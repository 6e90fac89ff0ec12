use bevy_ecs::prelude::*;
use bevy_math::Vec2;
use bevy_time::Time;

use common::{
    collision::slide_player_along_walls, constants::PLAYER_SPEED, markers::PlayerMarker,
    protocol::Position,
};

use crate::resources::{IntentState, MazeMap, Modes};

// ============================================================================
// Player Movement System
// ============================================================================

// Resolve the buffered movement intent into a position update. X and Y are
// attempted independently so the player can hug walls; ghost mode bypasses
// collision entirely.
pub fn player_movement_system(
    time: Res<Time>,
    maze: Res<MazeMap>,
    intent: Res<IntentState>,
    modes: Res<Modes>,
    mut query: Query<&mut Position, With<PlayerMarker>>,
) {
    let delta = time.delta_secs();
    let velocity = intent.0.to_velocity(PLAYER_SPEED);
    if velocity == Vec2::ZERO {
        return;
    }

    let Ok(mut pos) = query.single_mut() else {
        return;
    };

    *pos = slide_player_along_walls(
        &maze.maze,
        &pos,
        velocity.x * delta,
        velocity.y * delta,
        modes.ghost,
    );
}
