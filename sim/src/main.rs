use anyhow::Result;
use clap::Parser;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tracing::{info, warn};

use common::tiles::tile_at;

use sim::{
    SimConfig, SimulationClock,
    constants::{DECAY_TICK_HZ, DEFAULT_ENEMY_COUNT, MOVEMENT_TICK_HZ},
    init_tracing,
};

// ============================================================================
// CLI Argument Parsing
// ============================================================================

#[derive(Parser)]
#[command(author, version, about = "Headless maze exploration simulation", long_about = None)]
struct Args {
    // Maze width in tiles
    #[arg(long, default_value_t = 40)]
    cols: i32,

    // Maze height in tiles
    #[arg(long, default_value_t = 30)]
    rows: i32,

    // Seed for a reproducible maze; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    // Number of pursuing enemies
    #[arg(long, default_value_t = DEFAULT_ENEMY_COUNT)]
    enemies: u32,

    // Disable the open-room overlay (pure corridors)
    #[arg(long, default_value_t = false)]
    no_rooms: bool,
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = SimConfig {
        cols: args.cols,
        rows: args.rows,
        seed: args.seed,
        enemies: args.enemies,
        rooms: !args.no_rooms,
    };

    let mut clock = SimulationClock::new(&config)?;
    info!(
        "generated {}x{} maze, {} wall tiles, {} enemies",
        args.cols,
        args.rows,
        clock.wall_index().len(),
        args.enemies
    );

    let movement_tick = Duration::from_nanos(1_000_000_000 / MOVEMENT_TICK_HZ);
    let decay_tick = Duration::from_nanos(1_000_000_000 / DECAY_TICK_HZ);

    // Two decoupled cadences, serialized by the single select loop
    let mut movement = time::interval(movement_tick);
    movement.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut decay = time::interval(decay_tick);
    decay.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut status = time::interval(Duration::from_secs(5));

    info!("starting simulation loop...");

    loop {
        tokio::select! {
            _ = movement.tick() => {
                let update_start = Instant::now();
                clock.tick_movement(movement_tick);
                let update_elapsed = update_start.elapsed();

                if update_elapsed > movement_tick {
                    warn!(
                        "movement tick took {:.2}ms (exceeded {:.2}ms budget)",
                        update_elapsed.as_secs_f64() * 1000.0,
                        movement_tick.as_secs_f64() * 1000.0
                    );
                }
            }
            _ = decay.tick() => {
                clock.tick_decay();
            }
            _ = status.tick() => {
                let snapshot = clock.snapshot();
                let visible = snapshot.enemies.iter().filter(|e| e.red.is_some()).count();
                let player_tile = tile_at(&snapshot.player.pos);
                info!(
                    "tick {} player ({}, {}) sanity {:.0}% light radius {:.0} visible enemies {}/{}",
                    snapshot.tick,
                    player_tile.col,
                    player_tile.row,
                    snapshot.sanity_fraction * 100.0,
                    clock.light_radius(),
                    visible,
                    snapshot.enemies.len()
                );
                for line in clock.drain_events() {
                    info!("event: {line}");
                }
            }
        }
    }
}
