pub mod enemies;
pub mod helpers;
pub mod players;

pub use enemies::slide_enemy_along_walls;
pub use players::{overlap_player_vs_walls, slide_player_along_walls};
