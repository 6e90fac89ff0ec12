use super::helpers::slide_along_axes;
use crate::{constants::ENEMY_SIZE, protocol::Position, tiles::Maze};

// Enemies use the same independent-axis slide as the player; a blocked axis
// simply drops, there is no ghost mode for them.
#[must_use]
pub fn slide_enemy_along_walls(maze: &Maze, pos: &Position, dx: f32, dy: f32) -> Position {
    slide_along_axes(maze, pos, ENEMY_SIZE / 2.0, dx, dy)
}
