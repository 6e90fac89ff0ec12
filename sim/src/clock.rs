use std::collections::HashSet;
use std::time::Duration;

use anyhow::Result;
use bevy_ecs::prelude::*;
use bevy_math::Vec2;
use bevy_time::Time;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{info, warn};

use common::{
    constants::{SANITY_MAX, VIEW_HEIGHT, VIEW_WIDTH},
    lighting::light_radius,
    markers::{EnemyMarker, PlayerMarker},
    protocol::{EnemyId, MoveDirection, Position, Snapshot},
    tiles::{Maze, TileCoord, cell_center},
};

use crate::{
    components::EnemyPath,
    constants::{DEFAULT_ENEMY_COUNT, ENEMY_SPAWN_MIN_DISTANCE, START_TILE},
    map::{MazeConfig, find_spawn_cell, generate_maze},
    resources::{
        CameraState, EventLog, IntentState, LightState, MazeMap, Modes, RenderSnapshot, SanityState,
        SimRng,
    },
    systems::{
        camera_follow_system, enemies_movement_system, player_movement_system, sanity_decay_system,
        snapshot_publish_system,
    },
};

// ============================================================================
// Simulation Configuration
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub cols: i32,
    pub rows: i32,
    /// Seed for reproducible runs; random from OS entropy when None
    pub seed: Option<u64>,
    pub enemies: u32,
    pub rooms: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cols: 40,
            rows: 30,
            seed: None,
            enemies: DEFAULT_ENEMY_COUNT,
            rooms: true,
        }
    }
}

// ============================================================================
// Simulation Clock
// ============================================================================

// Owns the entire world state and the two fixed-cadence schedules. All
// mutation funnels through `tick_movement`/`tick_decay` plus the input
// methods, so callers serialize access by construction.
pub struct SimulationClock {
    world: World,
    movement: Schedule,
    decay: Schedule,
}

impl SimulationClock {
    pub fn new(config: &SimConfig) -> Result<Self> {
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let maze = generate_maze(
            &MazeConfig {
                cols: config.cols,
                rows: config.rows,
                rooms: config.rooms,
            },
            &mut rng,
        )?;
        let wall_index = maze.wall_tiles();

        let mut world = World::new();

        let start = cell_center(START_TILE);
        world.spawn((PlayerMarker, start));
        spawn_enemies(&mut world, &maze, &mut rng, config.enemies);

        let sanity = SANITY_MAX;
        world.insert_resource(Time::<()>::default());
        world.insert_resource(MazeMap { maze, wall_index });
        world.insert_resource(IntentState::default());
        world.insert_resource(Modes::default());
        world.insert_resource(SanityState { sanity });
        world.insert_resource(LightState {
            radius: light_radius(sanity),
        });
        world.insert_resource(CameraState {
            pos: Vec2::new(start.x - VIEW_WIDTH / 2.0, start.y - VIEW_HEIGHT / 2.0),
        });
        world.insert_resource(EventLog::default());
        world.insert_resource(RenderSnapshot::default());
        world.insert_resource(SimRng(rng));

        // Movement systems must run in order: resolve input into the player
        // move, follow with the camera, update enemies, publish the snapshot.
        let mut movement = Schedule::default();
        movement.add_systems(
            (
                player_movement_system,
                camera_follow_system,
                enemies_movement_system,
                snapshot_publish_system,
            )
                .chain(),
        );

        let mut decay = Schedule::default();
        decay.add_systems(sanity_decay_system);

        Ok(Self {
            world,
            movement,
            decay,
        })
    }

    // ------------------------------------------------------------------
    // Tick entry points
    // ------------------------------------------------------------------

    pub fn tick_movement(&mut self, dt: Duration) {
        self.world.resource_mut::<Time>().advance_by(dt);
        self.movement.run(&mut self.world);
    }

    pub fn tick_decay(&mut self) {
        self.decay.run(&mut self.world);
    }

    // ------------------------------------------------------------------
    // Input boundary
    // ------------------------------------------------------------------

    pub fn set_movement(&mut self, direction: MoveDirection, pressed: bool) {
        self.world
            .resource_mut::<IntentState>()
            .0
            .set(direction, pressed);
    }

    pub fn toggle_ghost_mode(&mut self) -> bool {
        let on = {
            let mut modes = self.world.resource_mut::<Modes>();
            modes.ghost = !modes.ghost;
            modes.ghost
        };
        self.log_toggle("Ghost Mode", on);
        on
    }

    pub fn toggle_debug_mode(&mut self) -> bool {
        let on = {
            let mut modes = self.world.resource_mut::<Modes>();
            modes.debug = !modes.debug;
            modes.debug
        };
        self.log_toggle("Debug Mode", on);
        on
    }

    fn log_toggle(&mut self, name: &str, on: bool) {
        let line = format!("{name}: {}", if on { "On" } else { "Off" });
        info!("{line}");
        self.world.resource_mut::<EventLog>().push(line);
    }

    // ------------------------------------------------------------------
    // Render/query boundary
    // ------------------------------------------------------------------

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.world.resource::<RenderSnapshot>().0.clone()
    }

    pub fn drain_events(&mut self) -> Vec<String> {
        self.world.resource_mut::<EventLog>().drain()
    }

    #[must_use]
    pub fn maze(&self) -> &Maze {
        &self.world.resource::<MazeMap>().maze
    }

    #[must_use]
    pub fn wall_index(&self) -> &[TileCoord] {
        &self.world.resource::<MazeMap>().wall_index
    }

    #[must_use]
    pub fn sanity(&self) -> f32 {
        self.world.resource::<SanityState>().sanity
    }

    #[must_use]
    pub fn light_radius(&self) -> f32 {
        self.world.resource::<LightState>().radius
    }

    pub fn player_position(&mut self) -> Option<Position> {
        let mut query = self.world.query_filtered::<&Position, With<PlayerMarker>>();
        query.single(&self.world).ok().copied()
    }

    pub fn enemy_positions(&mut self) -> Vec<Position> {
        let mut query = self.world.query_filtered::<&Position, With<EnemyMarker>>();
        query.iter(&self.world).copied().collect()
    }
}

// Place enemies on random floor cells away from the player start. A crowded
// or tiny maze may fit fewer than requested; that only gets a warning.
fn spawn_enemies(world: &mut World, maze: &Maze, rng: &mut StdRng, count: u32) {
    let mut occupied: HashSet<_> = HashSet::new();
    for i in 0..count {
        let Some(cell) = find_spawn_cell(rng, maze, START_TILE, ENEMY_SPAWN_MIN_DISTANCE, &occupied)
        else {
            warn!("no free spawn cell for enemy {i}, skipping the rest");
            break;
        };
        occupied.insert(cell);
        world.spawn((EnemyMarker, EnemyId(i), cell_center(cell), EnemyPath::default()));
    }
}
