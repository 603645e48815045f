pub mod config;
pub mod correct;
pub mod detector;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layouts;
pub mod session;
pub mod speech;

pub use config::{DragMode, Settings};
pub use engine::Engine;
pub use grid::{Bounds, Cell, Grid, Symbol};
pub use layouts::Layout;
