use std::collections::HashSet;

use rand::Rng;

use common::tiles::{Maze, TileCoord};

// Find a random unoccupied floor cell at least `min_distance` tiles
// (Chebyshev) away from `origin`. Gives up after a bounded number of tries
// rather than looping forever on crowded or tiny mazes.
pub fn find_spawn_cell(
    rng: &mut impl Rng,
    maze: &Maze,
    origin: TileCoord,
    min_distance: i32,
    occupied: &HashSet<TileCoord>,
) -> Option<TileCoord> {
    const MAX_ATTEMPTS: usize = 100;

    for _ in 0..MAX_ATTEMPTS {
        let coord = TileCoord::new(
            rng.random_range(0..maze.cols()),
            rng.random_range(0..maze.rows()),
        );
        if maze.is_floor(coord) && coord.chebyshev(origin) >= min_distance && !occupied.contains(&coord) {
            return Some(coord);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn spawn_respects_distance_and_occupancy() {
        let mut maze = Maze::new(12, 12).unwrap();
        for col in 1..11 {
            maze.set_floor(TileCoord::new(col, 5));
        }
        let origin = TileCoord::new(1, 5);
        let mut occupied = HashSet::new();
        occupied.insert(TileCoord::new(10, 5));

        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let cell = find_spawn_cell(&mut rng, &maze, origin, 4, &occupied).unwrap();
            assert!(maze.is_floor(cell));
            assert!(cell.chebyshev(origin) >= 4);
            assert!(!occupied.contains(&cell));
        }
    }

    #[test]
    fn gives_up_when_nothing_qualifies() {
        let maze = Maze::new(6, 6).unwrap(); // all wall
        let mut rng = StdRng::seed_from_u64(0);
        let cell = find_spawn_cell(&mut rng, &maze, TileCoord::new(1, 1), 1, &HashSet::new());
        assert!(cell.is_none());
    }
}
