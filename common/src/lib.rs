pub mod collision;
pub mod constants;
pub mod io;
pub mod lighting;
pub mod markers;
pub mod protocol;
pub mod tiles;
