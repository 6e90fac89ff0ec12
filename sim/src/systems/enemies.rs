use bevy_ecs::prelude::*;
use bevy_time::Time;
use rand::Rng;

use common::{
    collision::slide_enemy_along_walls,
    constants::{
        ENEMY_BASE_SPEED, ENEMY_FAR_MULTIPLIER, ENEMY_NEAR_MULTIPLIER, PHYSICS_EPSILON,
        WAYPOINT_THRESHOLD,
    },
    lighting::chase_radius,
    markers::{EnemyMarker, PlayerMarker},
    protocol::Position,
    tiles::{Maze, cell_center, tile_at},
};

use crate::{
    components::EnemyPath,
    constants::{ENEMY_STALL_TICKS, REPATH_DRIFT_THRESHOLD},
    pathfind::{DIRECTIONS_8, find_path},
    resources::{LightState, MazeMap, SimRng},
};

// ============================================================================
// Enemy Think/Move System
// ============================================================================

// Pursue the player along a cached A* path, recomputing when the path runs
// out or the player drifts away from its goal; wander randomly when no route
// exists. Speed rubber-bands around the chase radius so distant enemies close
// in and nearby ones give the player room.
pub fn enemies_movement_system(
    time: Res<Time>,
    maze: Res<MazeMap>,
    light: Res<LightState>,
    mut rng: ResMut<SimRng>,
    mut param_set: ParamSet<(
        Query<(&mut Position, &mut EnemyPath), With<EnemyMarker>>,
        Query<&Position, With<PlayerMarker>>,
    )>,
) {
    let delta = time.delta_secs();

    let player_pos = {
        let players = param_set.p1();
        match players.single() {
            Ok(pos) => *pos,
            Err(_) => return,
        }
    };
    let player_tile = tile_at(&player_pos);
    let chase = chase_radius(light.radius);

    for (mut pos, mut path) in &mut param_set.p0() {
        let current_tile = tile_at(&pos);

        // Invalidate a stale path once the player has drifted from its goal
        if path
            .goal
            .is_some_and(|goal| goal.chebyshev(player_tile) > REPATH_DRIFT_THRESHOLD)
        {
            path.clear();
        }

        if path.waypoints.is_empty() {
            let found = find_path(&maze.maze, current_tile, player_tile);
            if found.is_empty() {
                // No route (or already on the player's tile): single-step wander
                wander(&maze.maze, &mut pos, &mut rng.0, delta);
                continue;
            }
            path.set(found, player_tile);
        }

        let Some(&waypoint) = path.waypoints.front() else {
            continue;
        };
        let target = cell_center(waypoint);
        let to_target = target.to_vec2() - pos.to_vec2();
        let remaining = to_target.length();

        if remaining < WAYPOINT_THRESHOLD {
            path.waypoints.pop_front();
            continue;
        }

        let multiplier = if pos.distance(&player_pos) > chase {
            ENEMY_FAR_MULTIPLIER
        } else {
            ENEMY_NEAR_MULTIPLIER
        };
        let step_len = (ENEMY_BASE_SPEED * multiplier * delta).min(remaining);
        let step = to_target / remaining.max(PHYSICS_EPSILON) * step_len;

        let before = *pos;
        *pos = slide_enemy_along_walls(&maze.maze, &pos, step.x, step.y);

        if pos.distance(&target) < WAYPOINT_THRESHOLD {
            path.waypoints.pop_front();
            path.stall_ticks = 0;
        } else if pos.distance(&before) < PHYSICS_EPSILON {
            // Wedged against geometry the path thought was passable
            path.stall_ticks += 1;
            if path.stall_ticks > ENEMY_STALL_TICKS {
                path.clear();
            }
        } else {
            path.stall_ticks = 0;
        }
    }
}

// Pick a random movement direction and attempt the move; failure is ignored
fn wander(maze: &Maze, pos: &mut Position, rng: &mut impl Rng, delta: f32) {
    let (dc, dr) = DIRECTIONS_8[rng.random_range(0..DIRECTIONS_8.len())];
    let step = ENEMY_BASE_SPEED * delta;
    *pos = slide_enemy_along_walls(maze, pos, dc as f32 * step, dr as f32 * step);
}
