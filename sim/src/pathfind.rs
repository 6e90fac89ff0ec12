use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use common::tiles::{Maze, TileCoord};

// ============================================================================
// Grid Graph
// ============================================================================

// 8-connected movement: four axis steps plus four diagonals, all unit cost
pub const DIRECTIONS_8: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

// A diagonal step may squeeze past a single wall corner, but not tunnel
// through a pair of orthogonal walls.
fn diagonal_blocked(maze: &Maze, from: TileCoord, dc: i32, dr: i32) -> bool {
    dc != 0 && dr != 0 && maze.is_wall(from.offset(dc, 0)) && maze.is_wall(from.offset(0, dr))
}

// Walkable successors of a tile; shared by A* and by the BFS used in tests
#[must_use]
pub fn walkable_neighbors(maze: &Maze, from: TileCoord) -> Vec<TileCoord> {
    DIRECTIONS_8
        .iter()
        .filter_map(|&(dc, dr)| {
            let next = from.offset(dc, dr);
            if maze.is_floor(next) && !diagonal_blocked(maze, from, dc, dr) {
                Some(next)
            } else {
                None
            }
        })
        .collect()
}

// ============================================================================
// A* Search
// ============================================================================

/// Shortest path from `start` to `goal` over the walkable grid, excluding the
/// start tile. Unit edge cost with a Chebyshev heuristic, which is admissible
/// and consistent for 8-connected unit-cost movement. Returns an empty vector
/// when no route exists; callers treat that as "wander", not as an error.
#[must_use]
pub fn find_path(maze: &Maze, start: TileCoord, goal: TileCoord) -> Vec<TileCoord> {
    if start == goal || !maze.is_floor(start) || !maze.is_floor(goal) {
        return Vec::new();
    }

    // Reverse min-heap on (f, insertion order); ties break in insertion order
    let mut open = BinaryHeap::new();
    let mut came_from: HashMap<TileCoord, TileCoord> = HashMap::new();
    let mut g_score: HashMap<TileCoord, i32> = HashMap::new();
    let mut closed: HashSet<TileCoord> = HashSet::new();
    let mut order = 0u64;

    g_score.insert(start, 0);
    open.push(Reverse((start.chebyshev(goal), order, start)));

    while let Some(Reverse((_, _, current))) = open.pop() {
        if current == goal {
            return reconstruct(&came_from, start, goal);
        }
        if !closed.insert(current) {
            continue; // stale heap entry
        }

        let g = g_score[&current];
        for next in walkable_neighbors(maze, current) {
            if closed.contains(&next) {
                continue;
            }
            let tentative = g + 1;
            if g_score.get(&next).is_none_or(|&known| tentative < known) {
                g_score.insert(next, tentative);
                came_from.insert(next, current);
                order += 1;
                open.push(Reverse((tentative + next.chebyshev(goal), order, next)));
            }
        }
    }

    Vec::new()
}

// Walk the predecessor map backward from the goal, then flip into
// start-to-goal order without the start cell itself.
fn reconstruct(came_from: &HashMap<TileCoord, TileCoord>, start: TileCoord, goal: TileCoord) -> Vec<TileCoord> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&previous) = came_from.get(&current) {
        if previous == start {
            break;
        }
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    // Build a maze from ascii rows: '#' wall, '.' floor
    fn maze_from(rows: &[&str]) -> Maze {
        let mut maze = Maze::new(rows[0].len() as i32, rows.len() as i32).unwrap();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch == '.' {
                    maze.set_floor(TileCoord::new(col as i32, row as i32));
                }
            }
        }
        maze
    }

    // Brute-force BFS oracle over the same neighbor function
    fn bfs_distance(maze: &Maze, start: TileCoord, goal: TileCoord) -> Option<usize> {
        let mut dist = HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert(start, 0usize);
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            if current == goal {
                return dist.get(&goal).copied();
            }
            let d = dist[&current];
            for next in walkable_neighbors(maze, current) {
                if !dist.contains_key(&next) {
                    dist.insert(next, d + 1);
                    queue.push_back(next);
                }
            }
        }
        None
    }

    fn assert_walkable(maze: &Maze, start: TileCoord, path: &[TileCoord]) {
        let mut previous = start;
        for &step in path {
            assert_eq!(previous.chebyshev(step), 1, "non-adjacent step");
            assert!(maze.is_floor(step), "step onto a wall");
            previous = step;
        }
    }

    #[test]
    fn straight_corridor_path() {
        let maze = maze_from(&["#######", "#.....#", "#######", "#######"]);
        let path = find_path(&maze, TileCoord::new(1, 1), TileCoord::new(5, 1));
        assert_eq!(path.len(), 4);
        assert_eq!(path.last(), Some(&TileCoord::new(5, 1)));
        assert_walkable(&maze, TileCoord::new(1, 1), &path);
    }

    #[test]
    fn diagonals_shorten_open_rooms() {
        let maze = maze_from(&["######", "#....#", "#....#", "#....#", "#....#", "######"]);
        let path = find_path(&maze, TileCoord::new(1, 1), TileCoord::new(4, 4));
        // Chebyshev-optimal: three diagonal steps
        assert_eq!(path.len(), 3);
        assert_walkable(&maze, TileCoord::new(1, 1), &path);
    }

    #[test]
    fn wall_pair_blocks_diagonal_tunnel() {
        // Only connection between the two floor cells is the blocked diagonal
        let maze = maze_from(&["####", "#.##", "##.#", "####"]);
        let path = find_path(&maze, TileCoord::new(1, 1), TileCoord::new(2, 2));
        assert!(path.is_empty());
    }

    #[test]
    fn single_corner_can_be_squeezed() {
        let maze = maze_from(&["####", "#..#", "##.#", "####"]);
        let path = find_path(&maze, TileCoord::new(1, 1), TileCoord::new(2, 2));
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn disconnected_regions_return_empty() {
        let maze = maze_from(&["#####", "#.#.#", "#####", "#####"]);
        let path = find_path(&maze, TileCoord::new(1, 1), TileCoord::new(3, 1));
        assert!(path.is_empty());
    }

    #[test]
    fn start_equals_goal_is_empty() {
        let maze = maze_from(&["####", "#.##", "####", "####"]);
        assert!(find_path(&maze, TileCoord::new(1, 1), TileCoord::new(1, 1)).is_empty());
    }

    #[test]
    fn matches_bfs_on_synthetic_grid() {
        let maze = maze_from(&[
            "##########",
            "#....#...#",
            "#.##.#.#.#",
            "#.#..#.#.#",
            "#.#.##.#.#",
            "#.#....#.#",
            "#.######.#",
            "#........#",
            "##########",
        ]);
        let start = TileCoord::new(1, 1);
        for goal in maze.floor_tiles() {
            if goal == start {
                continue;
            }
            let path = find_path(&maze, start, goal);
            let oracle = bfs_distance(&maze, start, goal);
            match oracle {
                Some(expected) => {
                    assert_eq!(path.len(), expected, "suboptimal path to {goal:?}");
                    assert_walkable(&maze, start, &path);
                }
                None => assert!(path.is_empty(), "path into unreachable {goal:?}"),
            }
        }
    }
}
