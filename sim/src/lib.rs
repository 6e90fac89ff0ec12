pub mod clock;
pub mod components;
pub mod config;
pub mod constants;
pub mod map;
pub mod pathfind;
pub mod resources;
pub mod systems;

pub use clock::{SimConfig, SimulationClock};
pub use config::init_tracing;
