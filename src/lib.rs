//! MAZE3D - a procedurally generated maze, walked in first person via a
//! grid-marching ray caster.
//! Main library.

mod config;
mod gameloop;
mod input;
mod maze;
mod minimap;
mod player;
mod raycaster;
mod render3d;
mod scrbuf;
mod sdl_wrapper;

pub use config::*;
pub use gameloop::*;
pub use input::*;
pub use maze::*;
pub use minimap::*;
pub use player::*;
pub use raycaster::*;
pub use render3d::*;
pub use scrbuf::*;
pub use sdl_wrapper::*;
