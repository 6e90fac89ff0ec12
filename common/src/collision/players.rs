use super::helpers::{aabb_overlaps_wall, slide_along_axes};
use crate::{constants::PLAYER_SIZE, protocol::Position, tiles::Maze};

#[must_use]
pub fn overlap_player_vs_walls(maze: &Maze, pos: &Position) -> bool {
    aabb_overlaps_wall(maze, pos, PLAYER_SIZE / 2.0)
}

// Independent-axis player move. Ghost mode skips collision entirely and the
// full displacement is applied.
#[must_use]
pub fn slide_player_along_walls(
    maze: &Maze,
    pos: &Position,
    dx: f32,
    dy: f32,
    ghost_mode: bool,
) -> Position {
    if ghost_mode {
        return Position::new(pos.x + dx, pos.y + dy);
    }
    slide_along_axes(maze, pos, PLAYER_SIZE / 2.0, dx, dy)
}
