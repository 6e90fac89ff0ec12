use std::collections::{HashSet, VecDeque};

use common::tiles::{Maze, TileCoord};

// Check that every floor tile is reachable from the first floor tile via
// 4-directional floor-to-floor moves. This is the DFS-carving invariant the
// generator relies on; room overlays must not break it.
#[must_use]
pub fn all_floors_reachable(maze: &Maze) -> bool {
    let floors = maze.floor_tiles();
    let Some(&start) = floors.first() else {
        return true; // nothing carved, nothing disconnected
    };
    let target_count = floors.len();

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for (dc, dr) in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
            let next = TileCoord::new(current.col + dc, current.row + dr);
            if maze.is_floor(next) && !visited.contains(&next) {
                visited.insert(next);
                queue.push_back(next);
            }
        }

        if visited.len() == target_count {
            return true;
        }
    }

    visited.len() == target_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_disconnected_pockets() {
        let mut maze = Maze::new(7, 7).unwrap();
        maze.set_floor(TileCoord::new(1, 1));
        maze.set_floor(TileCoord::new(2, 1));
        // isolated pocket
        maze.set_floor(TileCoord::new(5, 5));
        assert!(!all_floors_reachable(&maze));
    }

    #[test]
    fn accepts_connected_corridor() {
        let mut maze = Maze::new(7, 7).unwrap();
        for col in 1..=5 {
            maze.set_floor(TileCoord::new(col, 3));
        }
        assert!(all_floors_reachable(&maze));
    }

    #[test]
    fn all_wall_grid_is_trivially_fine() {
        let maze = Maze::new(5, 5).unwrap();
        assert!(all_floors_reachable(&maze));
    }
}
