use crate::{
    protocol::Position,
    tiles::{Maze, tile_at},
};

// ============================================================================
// AABB vs Tile Grid
// ============================================================================

// The four corners of an axis-aligned box centered at `pos`.
#[must_use]
pub fn aabb_corners(pos: &Position, half: f32) -> [Position; 4] {
    [
        Position::new(pos.x - half, pos.y - half),
        Position::new(pos.x + half, pos.y - half),
        Position::new(pos.x - half, pos.y + half),
        Position::new(pos.x + half, pos.y + half),
    ]
}

// A box overlaps a wall when any corner lands on a wall tile. Out-of-bounds
// tiles read as wall, so the maze border is solid by construction.
#[must_use]
pub fn aabb_overlaps_wall(maze: &Maze, pos: &Position, half: f32) -> bool {
    aabb_corners(pos, half)
        .iter()
        .any(|corner| maze.is_wall(tile_at(corner)))
}

// ============================================================================
// Independent-Axis Sliding
// ============================================================================

// Attempt the X move against the committed Y, then the Y move against the
// committed X. Each axis fails independently, so an entity can hug a wall on
// one axis while still moving on the other.
#[must_use]
pub fn slide_along_axes(maze: &Maze, pos: &Position, half: f32, dx: f32, dy: f32) -> Position {
    let mut out = *pos;

    let x_candidate = Position::new(pos.x + dx, out.y);
    if !aabb_overlaps_wall(maze, &x_candidate, half) {
        out.x = x_candidate.x;
    }

    let y_candidate = Position::new(out.x, pos.y + dy);
    if !aabb_overlaps_wall(maze, &y_candidate, half) {
        out.y = y_candidate.y;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::TILE_SIZE, tiles::TileCoord};

    // 5x5 grid, single floor cell at (2,2)
    fn single_cell_maze() -> Maze {
        let mut maze = Maze::new(5, 5).unwrap();
        maze.set_floor(TileCoord::new(2, 2));
        maze
    }

    fn center_of(col: i32, row: i32) -> Position {
        Position::new((col as f32 + 0.5) * TILE_SIZE, (row as f32 + 0.5) * TILE_SIZE)
    }

    #[test]
    fn box_inside_floor_tile_is_accepted() {
        let maze = single_cell_maze();
        assert!(!aabb_overlaps_wall(&maze, &center_of(2, 2), 4.0));
    }

    #[test]
    fn box_inside_wall_tile_is_rejected() {
        let maze = single_cell_maze();
        assert!(aabb_overlaps_wall(&maze, &center_of(1, 1), 4.0));
    }

    #[test]
    fn slide_blocks_both_axes_in_closed_cell() {
        let maze = single_cell_maze();
        let start = center_of(2, 2);
        let moved = slide_along_axes(&maze, &start, 4.0, 30.0, 30.0);
        assert_eq!(moved, start);
    }

    #[test]
    fn slide_allows_free_axis_while_hugging_wall() {
        // corridor: floors at (1,2), (2,2), (3,2); vertical moves blocked
        let mut maze = Maze::new(5, 5).unwrap();
        for col in 1..=3 {
            maze.set_floor(TileCoord::new(col, 2));
        }
        let start = center_of(2, 2);
        let moved = slide_along_axes(&maze, &start, 4.0, 3.0, 30.0);
        assert!((moved.x - (start.x + 3.0)).abs() < f32::EPSILON);
        assert!((moved.y - start.y).abs() < f32::EPSILON);
    }
}
