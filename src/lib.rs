mod common;
mod config;
mod grid;
mod input;
mod logging;
mod placement;
mod render;
mod ship;
mod square;

pub use common::*;
pub use config::*;
pub use grid::*;
pub use input::*;
pub use logging::init_logging;
pub use placement::*;
pub use render::*;
pub use ship::*;
pub use square::*;
