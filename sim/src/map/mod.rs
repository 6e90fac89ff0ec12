mod grid;
mod helpers;

pub use grid::all_floors_reachable;
pub use helpers::find_spawn_cell;

use std::collections::HashSet;

use anyhow::Result;
use rand::Rng;

use common::tiles::{Maze, TileCoord};

use crate::constants::{ROOM_COUNT_MAX, ROOM_COUNT_MIN, ROOM_EXTENT_MAX, ROOM_EXTENT_MIN, START_TILE};

// ============================================================================
// Maze Generation
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct MazeConfig {
    pub cols: i32,
    pub rows: i32,
    pub rooms: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            cols: 40,
            rows: 30,
            rooms: true,
        }
    }
}

/// Generate a maze via iterative DFS carving, optionally overlaid with open
/// rooms. The caller supplies the RNG, so a seeded RNG reproduces the maze.
pub fn generate_maze(config: &MazeConfig, rng: &mut impl Rng) -> Result<Maze> {
    let mut maze = Maze::new(config.cols, config.rows)?;

    carve_corridors(&mut maze, rng);
    if config.rooms {
        carve_rooms(&mut maze, rng);
    }

    debug_assert!(all_floors_reachable(&maze), "generated maze is disconnected");
    Ok(maze)
}

// Stack-based DFS over the odd-coordinate lattice. Steps are 2 cells long
// with the skipped cell carved too, which keeps walls 1 cell thick. Visits
// every reachable lattice cell exactly once, so the carved region is
// connected by construction.
fn carve_corridors(maze: &mut Maze, rng: &mut impl Rng) {
    let mut stack = vec![START_TILE];
    let mut visited: HashSet<TileCoord> = stack.iter().copied().collect();
    let mut directions = [(0, -2), (0, 2), (-2, 0), (2, 0)];

    while let Some(&current) = stack.last() {
        maze.set_floor(current);

        // Shuffle the four axis directions
        for i in (1..directions.len()).rev() {
            let j = rng.random_range(0..=i);
            directions.swap(i, j);
        }

        let mut advanced = false;
        for (dc, dr) in directions {
            let next = current.offset(dc, dr);
            let in_interior = next.col > 0
                && next.col < maze.cols() - 1
                && next.row > 0
                && next.row < maze.rows() - 1;
            if in_interior && !visited.contains(&next) {
                // carve the intermediate cell between the 2-step jump
                maze.set_floor(current.offset(dc / 2, dr / 2));
                visited.insert(next);
                stack.push(next);
                advanced = true;
                break;
            }
        }

        if !advanced {
            stack.pop();
        }
    }
}

// Force-clear a handful of rectangular rooms. Extents are clamped one cell
// short of the far border, and origins start at 1, so the outer wall ring
// survives. Re-clearing corridor cells is a no-op.
fn carve_rooms(maze: &mut Maze, rng: &mut impl Rng) {
    let rooms = rng.random_range(ROOM_COUNT_MIN..=ROOM_COUNT_MAX);
    for _ in 0..rooms {
        let room_col = rng.random_range(1..=maze.cols() - 3);
        let room_row = rng.random_range(1..=maze.rows() - 3);
        let width = rng.random_range(ROOM_EXTENT_MIN..=ROOM_EXTENT_MAX);
        let height = rng.random_range(ROOM_EXTENT_MIN..=ROOM_EXTENT_MAX);

        for row in room_row..(room_row + height).min(maze.rows() - 1) {
            for col in room_col..(room_col + width).min(maze.cols() - 1) {
                maze.set_floor(TileCoord::new(col, row));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn generate(seed: u64, cols: i32, rows: i32, rooms: bool) -> Maze {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_maze(&MazeConfig { cols, rows, rooms }, &mut rng).unwrap()
    }

    #[test]
    fn every_floor_reachable_across_seeds() {
        for seed in 0..25 {
            let maze = generate(seed, 21, 15, true);
            assert!(maze.is_floor(START_TILE), "seed {seed}: start not carved");
            assert!(all_floors_reachable(&maze), "seed {seed}: disconnected maze");
        }
    }

    #[test]
    fn border_ring_is_never_breached() {
        for seed in 0..25 {
            let maze = generate(seed, 20, 14, true);
            for col in 0..maze.cols() {
                assert!(maze.is_wall(TileCoord::new(col, 0)), "seed {seed}");
                assert!(maze.is_wall(TileCoord::new(col, maze.rows() - 1)), "seed {seed}");
            }
            for row in 0..maze.rows() {
                assert!(maze.is_wall(TileCoord::new(0, row)), "seed {seed}");
                assert!(maze.is_wall(TileCoord::new(maze.cols() - 1, row)), "seed {seed}");
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_maze() {
        let a = generate(1234, 30, 22, true);
        let b = generate(1234, 30, 22, true);
        assert_eq!(a.wall_tiles(), b.wall_tiles());
    }

    #[test]
    fn different_seeds_usually_differ() {
        let a = generate(1, 30, 22, false);
        let b = generate(2, 30, 22, false);
        assert_ne!(a.wall_tiles(), b.wall_tiles());
    }

    #[test]
    fn rooms_open_more_floor_than_corridors_alone() {
        let plain = generate(7, 25, 25, false);
        let roomy = generate(7, 25, 25, true);
        assert!(roomy.floor_tiles().len() > plain.floor_tiles().len());
    }

    #[test]
    fn rejects_bad_dimensions() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = MazeConfig {
            cols: 0,
            rows: 10,
            rooms: false,
        };
        assert!(generate_maze(&config, &mut rng).is_err());
    }
}
