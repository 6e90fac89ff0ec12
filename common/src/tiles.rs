use anyhow::{Result, bail};

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "bincode")]
use bincode::{Decode, Encode};

use crate::{constants::TILE_SIZE, protocol::Position};

// ============================================================================
// Tiles & Coordinates
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bincode", derive(Encode, Decode))]
pub enum Tile {
    Wall,
    Floor,
}

// Integer (column, row) index into the maze grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bincode", derive(Encode, Decode))]
pub struct TileCoord {
    pub col: i32,
    pub row: i32,
}

impl TileCoord {
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    #[must_use]
    pub const fn offset(self, dc: i32, dr: i32) -> Self {
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }

    // Chebyshev distance: the number of 8-directional steps between two tiles
    #[must_use]
    pub const fn chebyshev(self, other: Self) -> i32 {
        let dc = (self.col - other.col).abs();
        let dr = (self.row - other.row).abs();
        if dc > dr { dc } else { dr }
    }
}

// Convert a world position to the containing tile coordinate
#[must_use]
pub fn tile_at(pos: &Position) -> TileCoord {
    TileCoord {
        col: (pos.x / TILE_SIZE).floor() as i32,
        row: (pos.y / TILE_SIZE).floor() as i32,
    }
}

// Calculate the center position of a grid cell
#[must_use]
pub fn cell_center(coord: TileCoord) -> Position {
    Position {
        x: (coord.col as f32 + 0.5) * TILE_SIZE,
        y: (coord.row as f32 + 0.5) * TILE_SIZE,
    }
}

// ============================================================================
// Maze Grid
// ============================================================================

// Fixed-size grid of wall/floor cells. Immutable once generation finishes;
// the generator is the only writer via `set_floor`.
#[derive(Debug, Clone)]
pub struct Maze {
    cols: i32,
    rows: i32,
    cells: Vec<Tile>,
}

impl Maze {
    // Construct an all-wall grid. Dimensions must leave the start cell (1,1)
    // strictly inside the border ring; anything smaller is a config error.
    pub fn new(cols: i32, rows: i32) -> Result<Self> {
        if cols < 4 || rows < 4 {
            bail!("maze dimensions must be at least 4x4, got {cols}x{rows}");
        }
        Ok(Self {
            cols,
            rows,
            cells: vec![Tile::Wall; (cols * rows) as usize],
        })
    }

    #[must_use]
    pub const fn cols(&self) -> i32 {
        self.cols
    }

    #[must_use]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    #[must_use]
    pub const fn in_bounds(&self, coord: TileCoord) -> bool {
        coord.col >= 0 && coord.col < self.cols && coord.row >= 0 && coord.row < self.rows
    }

    const fn index(&self, coord: TileCoord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some((coord.row * self.cols + coord.col) as usize)
        } else {
            None
        }
    }

    // Out-of-bounds queries read as Wall so viewport overscan and edge
    // lighting lookups never fault.
    #[must_use]
    pub fn tile(&self, coord: TileCoord) -> Tile {
        self.index(coord).map_or(Tile::Wall, |i| self.cells[i])
    }

    #[must_use]
    pub fn is_wall(&self, coord: TileCoord) -> bool {
        self.tile(coord) == Tile::Wall
    }

    #[must_use]
    pub fn is_floor(&self, coord: TileCoord) -> bool {
        self.tile(coord) == Tile::Floor
    }

    // Carve a cell open. Clearing an already-open cell is a no-op; clearing
    // out of bounds is ignored.
    pub fn set_floor(&mut self, coord: TileCoord) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = Tile::Floor;
        }
    }

    // Derived wall index, built once after generation for renderer use
    #[must_use]
    pub fn wall_tiles(&self) -> Vec<TileCoord> {
        let mut walls = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let coord = TileCoord::new(col, row);
                if self.is_wall(coord) {
                    walls.push(coord);
                }
            }
        }
        walls
    }

    #[must_use]
    pub fn floor_tiles(&self) -> Vec<TileCoord> {
        let mut floors = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let coord = TileCoord::new(col, row);
                if self.is_floor(coord) {
                    floors.push(coord);
                }
            }
        }
        floors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_dimensions() {
        assert!(Maze::new(0, 10).is_err());
        assert!(Maze::new(10, -3).is_err());
        assert!(Maze::new(3, 3).is_err());
        assert!(Maze::new(4, 4).is_ok());
    }

    #[test]
    fn out_of_bounds_reads_as_wall() {
        let maze = Maze::new(5, 5).unwrap();
        assert!(maze.is_wall(TileCoord::new(-1, 2)));
        assert!(maze.is_wall(TileCoord::new(2, 99)));
    }

    #[test]
    fn set_floor_is_idempotent() {
        let mut maze = Maze::new(5, 5).unwrap();
        let coord = TileCoord::new(2, 2);
        maze.set_floor(coord);
        maze.set_floor(coord);
        assert!(maze.is_floor(coord));
        // ignored, not a panic
        maze.set_floor(TileCoord::new(42, 42));
    }

    #[test]
    fn world_mapping_round_trips() {
        let coord = TileCoord::new(3, 7);
        assert_eq!(tile_at(&cell_center(coord)), coord);
    }

    #[test]
    fn chebyshev_counts_diagonal_steps() {
        let a = TileCoord::new(1, 1);
        assert_eq!(a.chebyshev(TileCoord::new(4, 2)), 3);
        assert_eq!(a.chebyshev(TileCoord::new(1, 1)), 0);
        assert_eq!(a.chebyshev(TileCoord::new(-2, 5)), 4);
    }
}
