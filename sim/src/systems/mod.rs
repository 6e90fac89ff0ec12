pub mod camera;
pub mod enemies;
pub mod players;
pub mod sanity;
pub mod snapshot;

pub use camera::camera_follow_system;
pub use enemies::enemies_movement_system;
pub use players::player_movement_system;
pub use sanity::sanity_decay_system;
pub use snapshot::snapshot_publish_system;
