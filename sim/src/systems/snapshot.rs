use bevy_ecs::prelude::*;

use common::{
    constants::{ENEMY_SIZE, PLAYER_SIZE, SANITY_MAX, TILE_SIZE, VIEW_HEIGHT, VIEW_WIDTH},
    lighting::{enemy_red, tile_channel},
    markers::{EnemyMarker, PlayerMarker},
    protocol::{EnemyId, EnemyView, PlayerView, Position, Snapshot, TileView},
    tiles::{TileCoord, cell_center},
};

use crate::resources::{CameraState, LightState, MazeMap, Modes, RenderSnapshot, SanityState};

// ============================================================================
// Snapshot Publish System
// ============================================================================

// Assemble the per-tick immutable render snapshot: the visible tile window
// with computed lighting, entity views, and the sanity meter fraction. The
// monotonic tick counter doubles as the renderer's dirty signal.
pub fn snapshot_publish_system(
    maze: Res<MazeMap>,
    camera: Res<CameraState>,
    sanity: Res<SanityState>,
    light: Res<LightState>,
    modes: Res<Modes>,
    mut snapshot: ResMut<RenderSnapshot>,
    player_query: Query<&Position, With<PlayerMarker>>,
    enemy_query: Query<(&EnemyId, &Position), With<EnemyMarker>>,
) {
    let Ok(player_pos) = player_query.single() else {
        return;
    };

    // Visible window, overscanned by the ceil; tiles past the maze edge read
    // as dark walls rather than faulting.
    let min_col = (camera.pos.x / TILE_SIZE).floor() as i32;
    let max_col = ((camera.pos.x + VIEW_WIDTH) / TILE_SIZE).ceil() as i32;
    let min_row = (camera.pos.y / TILE_SIZE).floor() as i32;
    let max_row = ((camera.pos.y + VIEW_HEIGHT) / TILE_SIZE).ceil() as i32;

    let capacity = ((max_col - min_col + 1) * (max_row - min_row + 1)).max(0) as usize;
    let mut tiles = Vec::with_capacity(capacity);
    for row in min_row..=max_row {
        for col in min_col..=max_col {
            let coord = TileCoord::new(col, row);
            let tile = maze.maze.tile(coord);
            let distance = player_pos.distance(&cell_center(coord));
            tiles.push(TileView {
                coord,
                tile,
                channel: tile_channel(tile, distance, light.radius, modes.debug),
            });
        }
    }

    let enemies = enemy_query
        .iter()
        .map(|(id, pos)| EnemyView {
            id: *id,
            pos: *pos,
            size: ENEMY_SIZE,
            red: enemy_red(pos.distance(player_pos), light.radius),
        })
        .collect();

    snapshot.0 = Snapshot {
        tick: snapshot.0.tick + 1,
        camera: Position::new(camera.pos.x, camera.pos.y),
        tiles,
        player: PlayerView {
            pos: *player_pos,
            size: PLAYER_SIZE,
            ghost_mode: modes.ghost,
        },
        enemies,
        sanity_fraction: sanity.sanity / SANITY_MAX,
        debug_mode: modes.debug,
    };
}
